use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Options forwarded to the HTML entry plugin.
///
/// Only `polyfills` is typed; every other key is passed through untouched so
/// callers can use any option the plugin understands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexHtmlOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polyfills: Option<Polyfills>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Polyfills the HTML entry plugin injects into the page.
///
/// The two mandatory flags are never read from caller data: whatever a
/// caller puts under `dynamicImport` or `webcomponents` (including `null`
/// or a string) lands in `other` and is dropped when the flags are forced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Polyfills {
    #[serde(skip_deserializing, skip_serializing_if = "is_false")]
    pub dynamic_import: bool,

    #[serde(skip_deserializing, skip_serializing_if = "is_false")]
    pub webcomponents: bool,

    /// Any other polyfill keys (`coreJs`, `fetch`, `custom`, ...)
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Caller keys that name the forced polyfills.
const FORCED_KEYS: [&str; 3] = ["dynamicImport", "dynamic_import", "webcomponents"];

fn is_false(value: &bool) -> bool {
    !*value
}

impl IndexHtmlOptions {
    /// Returns these options with `dynamicImport` and `webcomponents` forced on.
    ///
    /// The built output loads through `importShim` and ships custom elements,
    /// so both polyfills are mandatory. Caller values for these two keys are
    /// discarded whatever their type; all other polyfill keys are kept as given.
    pub fn with_required_polyfills(mut self) -> Self {
        let mut polyfills = self.polyfills.take().unwrap_or_default();
        for key in FORCED_KEYS {
            polyfills.other.shift_remove(key);
        }
        polyfills.dynamic_import = true;
        polyfills.webcomponents = true;
        self.polyfills = Some(polyfills);
        self
    }
}

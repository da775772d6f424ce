use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Reference to the CSS minification callback handed to the HTML minifier.
///
/// The callback itself lives in the JS host; this is the module specifier the
/// host resolves it from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CssMinifier(pub String);

impl CssMinifier {
    pub const DEFAULT_MODULE: &'static str = "@open-wc/building-utils/custom-minify-css";

    pub fn new(module: impl Into<String>) -> Self {
        Self(module.into())
    }

    pub fn module(&self) -> &str {
        &self.0
    }
}

impl Default for CssMinifier {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MODULE)
    }
}

/// Transform a template literal through the HTML minifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TemplateTag {
    Name(String),
    Styled { name: String, encapsulation: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlMinifierOptions {
    pub collapse_whitespace: bool,
    pub conservative_collapse: bool,
    pub remove_comments: bool,
    pub case_sensitive: bool,
    #[serde(rename = "minifyCSS")]
    pub minify_css: CssMinifier,
}

impl HtmlMinifierOptions {
    pub fn conservative(minify_css: CssMinifier) -> Self {
        Self {
            collapse_whitespace: true,
            conservative_collapse: true,
            remove_comments: true,
            case_sensitive: true,
            minify_css,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateHtmlMinifierOptions {
    /// Template tag libraries and the tags inside them whose literals get minified
    pub modules: IndexMap<String, Vec<TemplateTag>>,
    pub html_minifier: HtmlMinifierOptions,
}

impl TemplateHtmlMinifierOptions {
    /// `html` templates from lit-html and lit-element, plus lit-element's
    /// `css` templates minified as style content.
    pub fn lit(minify_css: CssMinifier) -> Self {
        let mut modules = IndexMap::new();
        modules.insert(
            "lit-html".to_string(),
            vec![TemplateTag::Name("html".to_string())],
        );
        modules.insert(
            "lit-element".to_string(),
            vec![
                TemplateTag::Name("html".to_string()),
                TemplateTag::Styled {
                    name: "css".to_string(),
                    encapsulation: "style".to_string(),
                },
            ],
        );

        Self {
            modules,
            html_minifier: HtmlMinifierOptions::conservative(minify_css),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
struct LooseOptions {
    loose: bool,
}

/// A babel plugin entry, serialized as `"name"` or `["name", options]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BabelPlugin {
    SyntaxDynamicImport,
    SyntaxImportMeta,
    NullishCoalescingOperator { loose: bool },
    OptionalChaining { loose: bool },
    /// Keeps `import.meta.url` pointing at the pre-bundle location
    BundledImportMeta,
    TemplateHtmlMinifier(TemplateHtmlMinifierOptions),
}

impl BabelPlugin {
    pub fn name(&self) -> &'static str {
        match self {
            BabelPlugin::SyntaxDynamicImport => "@babel/plugin-syntax-dynamic-import",
            BabelPlugin::SyntaxImportMeta => "@babel/plugin-syntax-import-meta",
            BabelPlugin::NullishCoalescingOperator { .. } => {
                "@babel/plugin-proposal-nullish-coalescing-operator"
            }
            BabelPlugin::OptionalChaining { .. } => "@babel/plugin-proposal-optional-chaining",
            BabelPlugin::BundledImportMeta => "bundled-import-meta",
            BabelPlugin::TemplateHtmlMinifier(_) => "template-html-minifier",
        }
    }
}

impl Serialize for BabelPlugin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BabelPlugin::NullishCoalescingOperator { loose }
            | BabelPlugin::OptionalChaining { loose } => {
                (self.name(), LooseOptions { loose: *loose }).serialize(serializer)
            }
            BabelPlugin::TemplateHtmlMinifier(options) => {
                (self.name(), options).serialize(serializer)
            }
            _ => serializer.serialize_str(self.name()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetEnvOptions {
    /// Browserslist queries
    pub targets: Vec<String>,
    pub exclude: Vec<String>,
    pub use_built_ins: bool,
    pub modules: bool,
}

impl PresetEnvOptions {
    /// Template literals are left alone: preset-env would compile them for
    /// Safari 12 only, and lit-html handles that quirk itself.
    pub fn for_browsers(targets: Vec<String>) -> Self {
        Self {
            targets,
            exclude: vec!["@babel/plugin-transform-template-literals".to_string()],
            use_built_ins: false,
            modules: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BabelPreset {
    Env(PresetEnvOptions),
}

impl BabelPreset {
    pub fn name(&self) -> &'static str {
        match self {
            BabelPreset::Env(_) => "@babel/preset-env",
        }
    }
}

impl Serialize for BabelPreset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BabelPreset::Env(options) => (self.name(), options).serialize(serializer),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BabelOptions {
    pub extensions: Vec<String>,
    pub plugins: Vec<BabelPlugin>,
    pub presets: Vec<BabelPreset>,
}

impl BabelOptions {
    /// Syntax plugins always run; the template minifier only in production.
    pub fn new(
        extensions: Vec<String>,
        production: bool,
        browsers: Vec<String>,
        minify_css: CssMinifier,
    ) -> Self {
        let mut plugins = vec![
            BabelPlugin::SyntaxDynamicImport,
            BabelPlugin::SyntaxImportMeta,
            BabelPlugin::NullishCoalescingOperator { loose: true },
            BabelPlugin::OptionalChaining { loose: true },
            BabelPlugin::BundledImportMeta,
        ];
        if production {
            plugins.push(BabelPlugin::TemplateHtmlMinifier(
                TemplateHtmlMinifierOptions::lit(minify_css),
            ));
        }

        Self {
            extensions,
            plugins,
            presets: vec![BabelPreset::Env(PresetEnvOptions::for_browsers(browsers))],
        }
    }

    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(BabelPlugin::name).collect()
    }
}

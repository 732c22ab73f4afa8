use std::collections::HashMap;

use indexmap::IndexMap;

use crate::config::{CustomLanguageConfig, QuoteConfig};
use crate::error::{Result, SieveError};

use super::delimiter::{Delimiter, Fence, Tag};

/// Longest escape accepted inside a character literal (`'\U0001F600'`).
const CHAR_ESCAPE_MAX: usize = 10;

/// A string literal form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRule {
    pub delimiter: Delimiter,
    /// Consumes exactly the next character, whatever it is.
    pub escape: Option<char>,
    /// Whether the literal may span line breaks.
    pub multiline: bool,
    /// A doubled close marker is content, not the end (`'it''s'` in SQL, `@"a""b"` in C#).
    pub doubled_close: bool,
    /// Character literals: the body must be a single character, or an escape
    /// sequence of at most this many characters, closed on the same line.
    /// Otherwise the opening is not a literal at all (Rust lifetimes).
    pub max_len: Option<usize>,
    /// A literal that opens its line (only whitespace before it) is documentation
    /// and scans as a comment (Python docstrings).
    pub docstring: bool,
}

impl QuoteRule {
    /// A single-line literal with the same open and close marker and a backslash escape.
    #[must_use]
    pub fn escaped(quote: &str) -> Self {
        Self {
            delimiter: Delimiter::fixed(quote, quote),
            escape: Some('\\'),
            multiline: false,
            doubled_close: false,
            max_len: None,
            docstring: false,
        }
    }

    /// A literal without escapes that may span lines.
    #[must_use]
    pub fn verbatim(open: &str, close: &str) -> Self {
        Self {
            delimiter: Delimiter::fixed(open, close),
            escape: None,
            multiline: true,
            doubled_close: false,
            max_len: None,
            docstring: false,
        }
    }

    /// A raw literal whose close repeats the tag of its open.
    #[must_use]
    pub const fn fenced(fence: Fence) -> Self {
        Self {
            delimiter: Delimiter::Fenced(fence),
            escape: None,
            multiline: true,
            doubled_close: false,
            max_len: None,
            docstring: false,
        }
    }

    #[must_use]
    pub const fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    #[must_use]
    pub const fn with_doubled_close(mut self) -> Self {
        self.doubled_close = true;
        self
    }

    #[must_use]
    pub const fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    #[must_use]
    pub const fn as_docstring(mut self) -> Self {
        self.docstring = true;
        self
    }
}

/// A block comment form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockComment {
    pub delimiter: Delimiter,
    /// Open and close markers only count at the start of a line (`=begin`/`=end`).
    pub anchored: bool,
}

impl BlockComment {
    #[must_use]
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            delimiter: Delimiter::fixed(start, end),
            anchored: false,
        }
    }

    #[must_use]
    pub const fn fenced(fence: Fence) -> Self {
        Self {
            delimiter: Delimiter::Fenced(fence),
            anchored: false,
        }
    }

    #[must_use]
    pub const fn at_line_start(mut self) -> Self {
        self.anchored = true;
        self
    }
}

/// Lexical comment and string rules for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRule {
    pub name: String,
    pub aliases: Vec<String>,
    pub extensions: Vec<String>,
    pub line_comments: Vec<String>,
    /// Line comment markers only count at the start of a word: at line start,
    /// or after whitespace or a shell metacharacter (`$#` and `${#x}` are code).
    pub line_comments_at_word_start: bool,
    pub block_comments: Vec<BlockComment>,
    /// Inner block-comment opens must be matched by their own close.
    pub nested: bool,
    pub quotes: Vec<QuoteRule>,
}

impl LanguageRule {
    #[must_use]
    pub fn new(name: &str, extensions: Vec<&str>) -> Self {
        Self {
            name: name.to_string(),
            aliases: Vec::new(),
            extensions: extensions.into_iter().map(String::from).collect(),
            line_comments: Vec::new(),
            line_comments_at_word_start: false,
            block_comments: Vec::new(),
            nested: false,
            quotes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_aliases(mut self, aliases: Vec<&str>) -> Self {
        self.aliases = aliases.into_iter().map(String::from).collect();
        self
    }

    #[must_use]
    pub fn with_line_comments(mut self, markers: Vec<&str>) -> Self {
        self.line_comments = markers.into_iter().map(String::from).collect();
        self
    }

    #[must_use]
    pub const fn at_word_start(mut self) -> Self {
        self.line_comments_at_word_start = true;
        self
    }

    #[must_use]
    pub fn with_block_comment(mut self, block: BlockComment) -> Self {
        self.block_comments.push(block);
        self
    }

    #[must_use]
    pub const fn with_nesting(mut self) -> Self {
        self.nested = true;
        self
    }

    #[must_use]
    pub fn with_quote(mut self, quote: QuoteRule) -> Self {
        self.quotes.push(quote);
        self
    }

    /// The `/* */` + `//` + `"` + `'` rule set shared by the C family.
    ///
    /// `'` opens a character literal only, so `1'000` and other stray quotes
    /// stay code.
    #[must_use]
    pub fn c_style(name: &str, extensions: Vec<&str>) -> Self {
        Self::new(name, extensions)
            .with_line_comments(vec!["//"])
            .with_block_comment(BlockComment::new("/*", "*/"))
            .with_quote(QuoteRule::escaped("\""))
            .with_quote(QuoteRule::escaped("'").with_max_len(CHAR_ESCAPE_MAX))
    }

    /// C-style comments with `"`, `'` and `` ` `` strings.
    fn ecmascript(name: &str, extensions: Vec<&str>) -> Self {
        Self::new(name, extensions)
            .with_line_comments(vec!["//"])
            .with_block_comment(BlockComment::new("/*", "*/"))
            .with_quote(QuoteRule::escaped("\""))
            .with_quote(QuoteRule::escaped("'"))
            .with_quote(QuoteRule::escaped("`").multiline())
    }

    /// Build a rule from a `[languages.<name>]` config table.
    #[must_use]
    pub fn from_custom(name: &str, config: &CustomLanguageConfig) -> Self {
        Self {
            name: name.to_string(),
            aliases: config.aliases.clone(),
            extensions: config.extensions.clone(),
            line_comments: config.line_comments.clone(),
            line_comments_at_word_start: config.line_comments_at_word_start,
            block_comments: config
                .block_comments
                .iter()
                .map(|(start, end)| BlockComment::new(start, end))
                .collect(),
            nested: config.nested,
            quotes: config.quotes.iter().map(quote_from_config).collect(),
        }
    }

    /// Whether the language has any marker the scanner could act on.
    #[must_use]
    pub fn has_markers(&self) -> bool {
        !(self.line_comments.is_empty() && self.block_comments.is_empty() && self.quotes.is_empty())
    }
}

fn quote_from_config(config: &QuoteConfig) -> QuoteRule {
    QuoteRule {
        delimiter: Delimiter::fixed(&config.open, config.close_marker()),
        escape: config.escape,
        multiline: config.multiline,
        doubled_close: config.doubled_close,
        max_len: None,
        docstring: config.docstring,
    }
}

#[derive(Debug)]
pub struct LanguageRegistry {
    languages: Vec<LanguageRule>,
    name_map: HashMap<String, usize>,
    extension_map: HashMap<String, usize>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            languages: Vec::new(),
            name_map: HashMap::new(),
            extension_map: HashMap::new(),
        }
    }

    /// Register a language. A language with the same name replaces the old entry.
    pub fn register(&mut self, language: LanguageRule) {
        let key = language.name.to_lowercase();
        let idx = if let Some(&idx) = self.name_map.get(&key) {
            self.languages[idx] = language;
            idx
        } else {
            self.languages.push(language);
            self.languages.len() - 1
        };

        let language = &self.languages[idx];
        self.name_map.insert(key, idx);
        for alias in &language.aliases {
            self.name_map.insert(alias.to_lowercase(), idx);
        }
        for ext in &language.extensions {
            self.extension_map
                .insert(ext.trim_start_matches('.').to_lowercase(), idx);
        }
    }

    /// Look up a language by name or alias (case-insensitive).
    ///
    /// # Errors
    /// Returns `SieveError::UnknownLanguage` if nothing is registered under `id`.
    pub fn rules_for(&self, id: &str) -> Result<&LanguageRule> {
        self.name_map
            .get(&id.trim().to_lowercase())
            .map(|&idx| &self.languages[idx])
            .ok_or_else(|| SieveError::UnknownLanguage(id.to_string()))
    }

    #[must_use]
    pub fn by_extension(&self, ext: &str) -> Option<&LanguageRule> {
        self.extension_map
            .get(&ext.trim_start_matches('.').to_lowercase())
            .map(|&idx| &self.languages[idx])
    }

    #[must_use]
    pub fn all(&self) -> &[LanguageRule] {
        &self.languages
    }

    /// The built-in languages plus the ones defined in config, in config order.
    #[must_use]
    pub fn with_custom_languages(custom: &IndexMap<String, CustomLanguageConfig>) -> Self {
        let mut registry = Self::default();
        for (name, config) in custom {
            registry.register(LanguageRule::from_custom(name, config));
        }
        registry
    }

    fn register_c_family(&mut self) {
        self.register(LanguageRule::c_style("C", vec!["c", "h"]));

        self.register(
            LanguageRule::c_style("C++", vec!["cpp", "hpp", "cc", "cxx", "hxx", "hh"])
                .with_aliases(vec!["cpp", "cxx"])
                .with_quote(QuoteRule::fenced(Fence::new(
                    ("R\"", "("),
                    (")", "\""),
                    Tag::Label,
                ))),
        );

        self.register(
            LanguageRule::c_style("C#", vec!["cs"])
                .with_aliases(vec!["csharp", "cs"])
                .with_quote(QuoteRule::verbatim("\"\"\"", "\"\"\""))
                .with_quote(QuoteRule::verbatim("@\"", "\"").with_doubled_close()),
        );

        self.register(
            LanguageRule::c_style("Java", vec!["java"])
                .with_quote(QuoteRule::escaped("\"\"\"").multiline()),
        );

        self.register(
            LanguageRule::ecmascript("JavaScript", vec!["js", "mjs", "cjs", "jsx"])
                .with_aliases(vec!["js"]),
        );

        self.register(
            LanguageRule::ecmascript("TypeScript", vec!["ts", "mts", "cts", "tsx"])
                .with_aliases(vec!["ts"]),
        );

        self.register(
            LanguageRule::c_style("Go", vec!["go"])
                .with_aliases(vec!["golang"])
                .with_quote(QuoteRule::verbatim("`", "`")),
        );

        self.register(
            LanguageRule::c_style("Kotlin", vec!["kt", "kts"])
                .with_nesting()
                .with_quote(QuoteRule::verbatim("\"\"\"", "\"\"\"")),
        );

        self.register(
            LanguageRule::new("PHP", vec!["php"])
                .with_line_comments(vec!["//", "#"])
                .with_block_comment(BlockComment::new("/*", "*/"))
                .with_quote(QuoteRule::escaped("\"").multiline())
                .with_quote(QuoteRule::escaped("'").multiline()),
        );
    }

    fn register_nesting_languages(&mut self) {
        // Lifetimes ('a) share the quote character with char literals.
        self.register(
            LanguageRule::new("Rust", vec!["rs"])
                .with_line_comments(vec!["//"])
                .with_block_comment(BlockComment::new("/*", "*/"))
                .with_nesting()
                .with_quote(QuoteRule::escaped("\"").multiline())
                .with_quote(QuoteRule::fenced(Fence::new(
                    ("r", "\""),
                    ("\"", ""),
                    Tag::Repeat('#'),
                )))
                .with_quote(QuoteRule::escaped("'").with_max_len(CHAR_ESCAPE_MAX)),
        );

        self.register(
            LanguageRule::new("Swift", vec!["swift"])
                .with_line_comments(vec!["//"])
                .with_block_comment(BlockComment::new("/*", "*/"))
                .with_nesting()
                .with_quote(QuoteRule::escaped("\"\"\"").multiline())
                .with_quote(QuoteRule::escaped("\""))
                .with_quote(QuoteRule::fenced(Fence::new(
                    ("#", "\""),
                    ("\"", "#"),
                    Tag::Repeat('#'),
                ))),
        );

        self.register(
            LanguageRule::new("Haskell", vec!["hs", "lhs"])
                .with_line_comments(vec!["--"])
                .with_block_comment(BlockComment::new("{-", "-}"))
                .with_nesting()
                .with_quote(QuoteRule::escaped("\"")),
        );
    }

    fn register_scripting_languages(&mut self) {
        self.register(
            LanguageRule::new("Python", vec!["py", "pyi", "pyw"])
                .with_aliases(vec!["py"])
                .with_line_comments(vec!["#"])
                .with_quote(QuoteRule::escaped("\"\"\"").multiline().as_docstring())
                .with_quote(QuoteRule::escaped("'''").multiline().as_docstring())
                .with_quote(QuoteRule::escaped("\""))
                .with_quote(QuoteRule::escaped("'")),
        );

        self.register(
            LanguageRule::new("Ruby", vec!["rb", "rake", "gemspec"])
                .with_aliases(vec!["rb"])
                .with_line_comments(vec!["#"])
                .with_block_comment(BlockComment::new("=begin", "=end").at_line_start())
                .with_quote(QuoteRule::escaped("\"").multiline())
                .with_quote(QuoteRule::escaped("'").multiline()),
        );

        self.register(
            LanguageRule::new("Shell", vec!["sh", "bash", "zsh"])
                .with_aliases(vec!["bash", "sh", "zsh"])
                .with_line_comments(vec!["#"])
                .at_word_start()
                .with_quote(QuoteRule::escaped("\"").multiline())
                .with_quote(QuoteRule::verbatim("'", "'")),
        );

        self.register(
            LanguageRule::new("Lua", vec!["lua"])
                .with_line_comments(vec!["--"])
                .with_block_comment(BlockComment::fenced(Fence::new(
                    ("--[", "["),
                    ("]", "]"),
                    Tag::Repeat('='),
                )))
                .with_quote(QuoteRule::escaped("\""))
                .with_quote(QuoteRule::escaped("'"))
                .with_quote(QuoteRule::fenced(Fence::new(
                    ("[", "["),
                    ("]", "]"),
                    Tag::Repeat('='),
                ))),
        );
    }

    fn register_markup_and_query(&mut self) {
        self.register(
            LanguageRule::new("SQL", vec!["sql"])
                .with_line_comments(vec!["--"])
                .with_block_comment(BlockComment::new("/*", "*/"))
                .with_quote(QuoteRule::verbatim("'", "'").with_doubled_close())
                .with_quote(QuoteRule::verbatim("\"", "\"").with_doubled_close()),
        );

        self.register(
            LanguageRule::new("HTML", vec!["html", "htm", "xml", "svg"])
                .with_aliases(vec!["xml"])
                .with_block_comment(BlockComment::new("<!--", "-->")),
        );
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register_c_family();
        registry.register_nesting_languages();
        registry.register_scripting_languages();
        registry.register_markup_and_query();
        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

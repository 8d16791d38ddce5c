//! Technology fingerprinting.
//!
//! A [`Fingerprinter`] compiles a table of [`SignatureSpec`]s once and then
//! matches fetched pages against it. Detection looks at five sources:
//!
//! - response headers (`Server`, `X-Powered-By`, cookies, CDN headers, ...)
//! - the HTML body
//! - `<script src>` URLs
//! - `<meta name=... content=...>` tags (mostly `generator`)
//! - the final URL after redirects
//!
//! Matches then pull in implied technologies (WordPress implies PHP, and
//! so on), and the result is grouped by category.

use std::collections::{BTreeSet, HashMap};

use regex::{Regex, RegexBuilder};

use crate::fetch::Page;
use crate::report::TechStack;
use crate::{Error, Result};

mod signatures;

pub use signatures::{BUILTIN, SignatureSpec};

/// A compiled signature.
#[derive(Debug)]
struct Signature {
    name: String,
    categories: Vec<String>,
    headers: Vec<(String, Regex)>,
    html: Vec<Regex>,
    scripts: Vec<Regex>,
    meta: Vec<(String, Regex)>,
    url: Vec<Regex>,
    implies: Vec<String>,
}

impl Signature {
    fn compile(spec: &SignatureSpec) -> Result<Self> {
        let compile_all = |patterns: &[&str]| {
            patterns
                .iter()
                .map(|p| compile(spec.name, p))
                .collect::<Result<Vec<_>>>()
        };
        let compile_pairs = |pairs: &[(&str, &str)]| {
            pairs
                .iter()
                .map(|(key, p)| -> Result<(String, Regex)> {
                    Ok((key.to_ascii_lowercase(), compile(spec.name, p)?))
                })
                .collect::<Result<Vec<_>>>()
        };

        Ok(Self {
            name: spec.name.to_string(),
            categories: spec.categories.iter().map(|c| c.to_string()).collect(),
            headers: compile_pairs(spec.headers)?,
            html: compile_all(spec.html)?,
            scripts: compile_all(spec.scripts)?,
            meta: compile_pairs(spec.meta)?,
            url: compile_all(spec.url)?,
            implies: spec.implies.iter().map(|i| i.to_string()).collect(),
        })
    }

    fn matches(&self, page: &Page, scripts: &[String], metas: &[(String, String)]) -> bool {
        self.headers
            .iter()
            .any(|(name, re)| page.header_values(name).any(|v| re.is_match(v)))
            || self.html.iter().any(|re| re.is_match(&page.body))
            || self
                .scripts
                .iter()
                .any(|re| scripts.iter().any(|src| re.is_match(src)))
            || self.meta.iter().any(|(name, re)| {
                metas
                    .iter()
                    .any(|(meta_name, content)| meta_name == name && re.is_match(content))
            })
            || self.url.iter().any(|re| re.is_match(&page.final_url))
    }
}

fn compile(signature: &str, pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| Error::config(format!("signature '{signature}': bad pattern '{pattern}': {e}")))
}

/// Matches pages against a compiled signature table.
#[derive(Debug)]
pub struct Fingerprinter {
    signatures: Vec<Signature>,
    by_name: HashMap<String, usize>,
    script_src: Regex,
    meta_tag: Regex,
    meta_attr: Regex,
}

impl Fingerprinter {
    /// Compile a signature table.
    ///
    /// Fails on an invalid pattern, a duplicate name, or an `implies`
    /// entry naming an unknown technology.
    pub fn new(specs: &[SignatureSpec]) -> Result<Self> {
        let signatures = specs.iter().map(Signature::compile).collect::<Result<Vec<_>>>()?;

        let mut by_name = HashMap::with_capacity(signatures.len());
        for (i, sig) in signatures.iter().enumerate() {
            if by_name.insert(sig.name.clone(), i).is_some() {
                return Err(Error::config(format!("duplicate signature '{}'", sig.name)));
            }
        }
        for sig in &signatures {
            if let Some(missing) = sig.implies.iter().find(|i| !by_name.contains_key(*i)) {
                return Err(Error::config(format!(
                    "signature '{}' implies unknown '{missing}'",
                    sig.name
                )));
            }
        }

        Ok(Self {
            signatures,
            by_name,
            script_src: compile("<script>", r#"<script\b[^>]*?\bsrc\s*=\s*["']?([^"'\s>]+)"#)?,
            meta_tag: compile("<meta>", r"<meta\b[^>]*>")?,
            meta_attr: compile("<meta>", r#"\b(name|property|content)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)?,
        })
    }

    /// Compile the built-in table.
    pub fn builtin() -> Result<Self> {
        Self::new(BUILTIN)
    }

    /// Number of known technologies.
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    /// True when the table is empty.
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// Detect technologies on a page.
    pub fn detect(&self, page: &Page) -> TechStack {
        let scripts = self.script_sources(&page.body);
        let metas = self.meta_tags(&page.body);

        let mut found: BTreeSet<usize> = self
            .signatures
            .iter()
            .enumerate()
            .filter(|(_, sig)| sig.matches(page, &scripts, &metas))
            .map(|(i, _)| i)
            .collect();

        let mut pending: Vec<usize> = found.iter().copied().collect();
        while let Some(i) = pending.pop() {
            for implied in &self.signatures[i].implies {
                if let Some(&j) = self.by_name.get(implied)
                    && found.insert(j)
                {
                    pending.push(j);
                }
            }
        }

        let mut stack = TechStack::new();
        for i in found {
            let sig = &self.signatures[i];
            for category in &sig.categories {
                stack
                    .entry(category.clone())
                    .or_default()
                    .push(sig.name.clone());
            }
        }
        for names in stack.values_mut() {
            names.sort();
            names.dedup();
        }
        stack
    }

    fn script_sources(&self, body: &str) -> Vec<String> {
        self.script_src
            .captures_iter(body)
            .filter_map(|c| c.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }

    /// `(name, content)` pairs of every `<meta>` tag; names are lowercase.
    fn meta_tags(&self, body: &str) -> Vec<(String, String)> {
        self.meta_tag
            .find_iter(body)
            .filter_map(|tag| {
                let mut name = None;
                let mut content = None;
                for attr in self.meta_attr.captures_iter(tag.as_str()) {
                    let value = attr
                        .get(2)
                        .or_else(|| attr.get(3))
                        .map(|m| m.as_str().to_string())
                        .unwrap_or_default();
                    match attr[1].to_ascii_lowercase().as_str() {
                        "content" => content = Some(value),
                        _ => name = Some(value.to_ascii_lowercase()),
                    }
                }
                Some((name?, content?))
            })
            .collect()
    }
}

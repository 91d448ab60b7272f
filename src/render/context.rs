//! Rendering context - options, the document style table, and diagnostics
//!
//! One context is passed by reference into every render call. Nothing else
//! is shared between shapes, so a caller rendering in parallel gives each
//! worker its own context and folds them together with
//! [`RenderContext::merge`].

use std::collections::BTreeMap;

use crate::errors::GeometryIssue;
use crate::log::warn;

use super::defaults;

/// Tunable settings.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Device units per document unit (EMU)
    pub scale: f64,
    /// Decimal places in serialized path data
    pub precision: usize,
    pub lighten_opacity: f64,
    pub lighten_less_opacity: f64,
    pub darken_opacity: f64,
    pub darken_less_opacity: f64,
    /// Marker size multipliers of the stroke width, sm/med/lg
    pub marker_sizes: [f64; 3],
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: defaults::SCALE,
            precision: defaults::PRECISION,
            lighten_opacity: defaults::LIGHTEN_OPACITY,
            lighten_less_opacity: defaults::LIGHTEN_LESS_OPACITY,
            darken_opacity: defaults::DARKEN_OPACITY,
            darken_less_opacity: defaults::DARKEN_LESS_OPACITY,
            marker_sizes: defaults::MARKER_SIZES,
        }
    }
}

impl RenderOptions {
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Document-wide table of shared definitions (gradients, patterns,
/// picture fills).
///
/// Entries are keyed by their content: the id of a definition is the
/// 64-bit FNV-1a hash of its prefix and content key. Identical definitions
/// from different shapes or workers get the same id in any build, and
/// merging two tables gives the same result in either order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleTable {
    entries: BTreeMap<String, String>,
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id for a definition body, `<prefix>-<hash>`.
    pub fn id_for(prefix: &str, body: &str) -> String {
        let bytes = prefix.bytes().chain([0]).chain(body.bytes());
        let hash = bytes.fold(FNV_OFFSET, |h, b| (h ^ u64::from(b)).wrapping_mul(FNV_PRIME));
        format!("{prefix}-{hash:016x}")
    }

    /// Register `body`; returns its id and whether it was new to the table.
    pub fn intern(&mut self, prefix: &str, body: &str) -> (String, bool) {
        let id = Self::id_for(prefix, body);
        let newly = !self.entries.contains_key(&id);
        if newly {
            self.entries.insert(id.clone(), body.to_string());
        }
        (id, newly)
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(id, body)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn merge(&mut self, other: StyleTable) {
        for (id, body) in other.entries {
            self.entries.entry(id).or_insert(body);
        }
    }
}

/// Rendering context
#[derive(Debug, Default)]
pub struct RenderContext {
    pub options: RenderOptions,
    pub styles: StyleTable,
    diagnostics: Vec<GeometryIssue>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Record an issue; it is also logged at warn level.
    pub fn report(&mut self, issue: GeometryIssue) {
        warn!(shape = issue.shape(), "{issue}");
        self.diagnostics.push(issue);
    }

    pub fn diagnostics(&self) -> &[GeometryIssue] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<GeometryIssue> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Fold `other` in: its styles join the table and its diagnostics are
    /// appended.
    pub fn merge(&mut self, other: RenderContext) {
        self.styles.merge(other.styles);
        self.diagnostics.extend(other.diagnostics);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_bodies_share_an_id() {
        let mut table = StyleTable::new();
        let (a, new_a) = table.intern("grad", "<stop offset=\"0\"/>");
        let (b, new_b) = table.intern("grad", "<stop offset=\"0\"/>");
        let (c, _) = table.intern("grad", "<stop offset=\"1\"/>");
        assert_eq!(a, b);
        assert!(new_a);
        assert!(!new_b);
        assert_ne!(a, c);
        assert!(a.starts_with("grad-"));
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(&c), Some("<stop offset=\"1\"/>"));
        let ids: Vec<_> = table.iter().map(|(id, _)| id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn ids_are_fixed_fnv_hashes() {
        assert_eq!(
            StyleTable::id_for("grad", "<stop offset=\"0\"/>"),
            "grad-8fd300d090269944"
        );
    }

    #[test]
    fn merge_is_order_independent() {
        let mut left = StyleTable::new();
        left.intern("grad", "one");
        left.intern("pat", "two");
        let mut right = StyleTable::new();
        right.intern("pat", "two");
        right.intern("grad", "three");

        let mut ab = left.clone();
        ab.merge(right.clone());
        let mut ba = right;
        ba.merge(left);
        assert_eq!(ab, ba);
        assert_eq!(ab.len(), 3);
    }

    #[test]
    fn context_merge_keeps_diagnostics() {
        let mut a = RenderContext::new();
        let mut b = RenderContext::new();
        b.report(GeometryIssue::DegenerateBox {
            shape: "s".into(),
            width: 0.0,
            height: 1.0,
        });
        b.styles.intern("grad", "x");
        a.merge(b);
        assert_eq!(a.diagnostics().len(), 1);
        assert_eq!(a.styles.len(), 1);
        assert_eq!(a.take_diagnostics().len(), 1);
        assert!(a.diagnostics().is_empty());
    }

    #[test]
    fn default_scale_maps_an_inch_to_96_units() {
        let opts = RenderOptions::default();
        assert!((914_400.0 * opts.scale - 96.0).abs() < 1e-9);
    }
}

//! Kind to family routing.
//!
//! Families are zero-sized values behind one enum; the table from kind to
//! family is built on first use and shared read-only afterwards. When two
//! families claim the same kind the one listed first wins.

use std::collections::HashMap;
use std::sync::LazyLock;

use enum_dispatch::enum_dispatch;

use crate::kind::PresetKind;
use crate::log::trace;

use super::presets::ShapeInput;
use super::presets::action_buttons::ActionButtons;
use super::presets::arrows::Arrows;
use super::presets::basic::Basic;
use super::presets::brackets::Brackets;
use super::presets::callouts::Callouts;
use super::presets::connectors::Connectors;
use super::presets::flowchart::Flowchart;
use super::presets::math::MathSymbols;
use super::presets::misc::Misc;
use super::presets::pies::Pies;
use super::presets::stars::Stars;
use super::types::Outline;

/// A group of preset kinds drawn by one module.
#[enum_dispatch]
pub trait PresetFamily {
    fn name(&self) -> &'static str;

    /// Kinds this family draws.
    fn kinds(&self) -> &'static [PresetKind];

    /// Outline of `input.kind` in its local box.
    fn render(&self, input: &ShapeInput<'_>) -> Outline;
}

#[enum_dispatch(PresetFamily)]
#[derive(Debug, Clone, Copy)]
pub enum Family {
    Basic,
    Arrows,
    Stars,
    Brackets,
    Callouts,
    MathSymbols,
    ActionButtons,
    Flowchart,
    Misc,
    Pies,
    Connectors,
}

const FAMILIES: [Family; 11] = [
    Family::Basic(Basic),
    Family::Arrows(Arrows),
    Family::Stars(Stars),
    Family::Brackets(Brackets),
    Family::Callouts(Callouts),
    Family::MathSymbols(MathSymbols),
    Family::ActionButtons(ActionButtons),
    Family::Flowchart(Flowchart),
    Family::Misc(Misc),
    Family::Pies(Pies),
    Family::Connectors(Connectors),
];

static REGISTRY: LazyLock<HashMap<PresetKind, Family>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    for family in FAMILIES {
        for &kind in family.kinds() {
            table.entry(kind).or_insert(family);
        }
    }
    table
});

/// The family drawing `kind`, if any.
pub fn family_of(kind: PresetKind) -> Option<Family> {
    REGISTRY.get(&kind).copied()
}

/// Whether `kind` has a formula.
pub fn is_supported(kind: PresetKind) -> bool {
    REGISTRY.contains_key(&kind)
}

/// Cataloged kinds without a formula.
pub fn unsupported_kinds() -> impl Iterator<Item = PresetKind> {
    PresetKind::ALL.iter().copied().filter(|k| !is_supported(*k))
}

/// Outline for `input.kind`, or `None` when no family draws it.
pub fn render_preset(input: &ShapeInput<'_>) -> Option<Outline> {
    let family = family_of(input.kind)?;
    trace!(kind = %input.kind, family = family.name(), "render preset");
    Some(family.render(input))
}

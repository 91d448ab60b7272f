//! The preset shape catalog.
//!
//! One variant per preset name of the shape-geometry vocabulary. Names
//! round-trip exactly through [`PresetKind::name`] and
//! [`PresetKind::from_name`].

use std::fmt;
use std::str::FromStr;

macro_rules! preset_kinds {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// A preset geometry kind.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum PresetKind {
            $($variant,)*
        }

        impl PresetKind {
            /// Every cataloged kind, in catalog order.
            pub const ALL: &'static [PresetKind] = &[$(PresetKind::$variant,)*];

            /// The kind's document name, e.g. `"rightArrow"`.
            pub fn name(self) -> &'static str {
                match self {
                    $(PresetKind::$variant => $name,)*
                }
            }

            /// Look up a kind by its document name (case-sensitive).
            pub fn from_name(name: &str) -> Option<PresetKind> {
                match name {
                    $($name => Some(PresetKind::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

preset_kinds! {
    Line => "line",
    LineInv => "lineInv",
    Triangle => "triangle",
    RtTriangle => "rtTriangle",
    Rect => "rect",
    Diamond => "diamond",
    Parallelogram => "parallelogram",
    Trapezoid => "trapezoid",
    NonIsoscelesTrapezoid => "nonIsoscelesTrapezoid",
    Pentagon => "pentagon",
    Hexagon => "hexagon",
    Heptagon => "heptagon",
    Octagon => "octagon",
    Decagon => "decagon",
    Dodecagon => "dodecagon",
    Star4 => "star4",
    Star5 => "star5",
    Star6 => "star6",
    Star7 => "star7",
    Star8 => "star8",
    Star10 => "star10",
    Star12 => "star12",
    Star16 => "star16",
    Star24 => "star24",
    Star32 => "star32",
    RoundRect => "roundRect",
    Round1Rect => "round1Rect",
    Round2SameRect => "round2SameRect",
    Round2DiagRect => "round2DiagRect",
    SnipRoundRect => "snipRoundRect",
    Snip1Rect => "snip1Rect",
    Snip2SameRect => "snip2SameRect",
    Snip2DiagRect => "snip2DiagRect",
    Plaque => "plaque",
    Ellipse => "ellipse",
    Teardrop => "teardrop",
    HomePlate => "homePlate",
    Chevron => "chevron",
    PieWedge => "pieWedge",
    Pie => "pie",
    BlockArc => "blockArc",
    Donut => "donut",
    NoSmoking => "noSmoking",
    RightArrow => "rightArrow",
    LeftArrow => "leftArrow",
    UpArrow => "upArrow",
    DownArrow => "downArrow",
    StripedRightArrow => "stripedRightArrow",
    NotchedRightArrow => "notchedRightArrow",
    BentUpArrow => "bentUpArrow",
    LeftRightArrow => "leftRightArrow",
    UpDownArrow => "upDownArrow",
    LeftUpArrow => "leftUpArrow",
    LeftRightUpArrow => "leftRightUpArrow",
    QuadArrow => "quadArrow",
    LeftArrowCallout => "leftArrowCallout",
    RightArrowCallout => "rightArrowCallout",
    UpArrowCallout => "upArrowCallout",
    DownArrowCallout => "downArrowCallout",
    LeftRightArrowCallout => "leftRightArrowCallout",
    UpDownArrowCallout => "upDownArrowCallout",
    QuadArrowCallout => "quadArrowCallout",
    BentArrow => "bentArrow",
    UturnArrow => "uturnArrow",
    CircularArrow => "circularArrow",
    LeftCircularArrow => "leftCircularArrow",
    LeftRightCircularArrow => "leftRightCircularArrow",
    CurvedRightArrow => "curvedRightArrow",
    CurvedLeftArrow => "curvedLeftArrow",
    CurvedUpArrow => "curvedUpArrow",
    CurvedDownArrow => "curvedDownArrow",
    SwooshArrow => "swooshArrow",
    Cube => "cube",
    Can => "can",
    LightningBolt => "lightningBolt",
    Heart => "heart",
    Sun => "sun",
    Moon => "moon",
    SmileyFace => "smileyFace",
    IrregularSeal1 => "irregularSeal1",
    IrregularSeal2 => "irregularSeal2",
    FoldedCorner => "foldedCorner",
    Bevel => "bevel",
    Frame => "frame",
    HalfFrame => "halfFrame",
    Corner => "corner",
    DiagStripe => "diagStripe",
    Chord => "chord",
    Arc => "arc",
    LeftBracket => "leftBracket",
    RightBracket => "rightBracket",
    LeftBrace => "leftBrace",
    RightBrace => "rightBrace",
    BracketPair => "bracketPair",
    BracePair => "bracePair",
    StraightConnector1 => "straightConnector1",
    BentConnector2 => "bentConnector2",
    BentConnector3 => "bentConnector3",
    BentConnector4 => "bentConnector4",
    BentConnector5 => "bentConnector5",
    CurvedConnector2 => "curvedConnector2",
    CurvedConnector3 => "curvedConnector3",
    CurvedConnector4 => "curvedConnector4",
    CurvedConnector5 => "curvedConnector5",
    Callout1 => "callout1",
    Callout2 => "callout2",
    Callout3 => "callout3",
    AccentCallout1 => "accentCallout1",
    AccentCallout2 => "accentCallout2",
    AccentCallout3 => "accentCallout3",
    BorderCallout1 => "borderCallout1",
    BorderCallout2 => "borderCallout2",
    BorderCallout3 => "borderCallout3",
    AccentBorderCallout1 => "accentBorderCallout1",
    AccentBorderCallout2 => "accentBorderCallout2",
    AccentBorderCallout3 => "accentBorderCallout3",
    WedgeRectCallout => "wedgeRectCallout",
    WedgeRoundRectCallout => "wedgeRoundRectCallout",
    WedgeEllipseCallout => "wedgeEllipseCallout",
    CloudCallout => "cloudCallout",
    Cloud => "cloud",
    Ribbon => "ribbon",
    Ribbon2 => "ribbon2",
    EllipseRibbon => "ellipseRibbon",
    EllipseRibbon2 => "ellipseRibbon2",
    LeftRightRibbon => "leftRightRibbon",
    VerticalScroll => "verticalScroll",
    HorizontalScroll => "horizontalScroll",
    Wave => "wave",
    DoubleWave => "doubleWave",
    Plus => "plus",
    FlowChartProcess => "flowChartProcess",
    FlowChartDecision => "flowChartDecision",
    FlowChartInputOutput => "flowChartInputOutput",
    FlowChartPredefinedProcess => "flowChartPredefinedProcess",
    FlowChartInternalStorage => "flowChartInternalStorage",
    FlowChartDocument => "flowChartDocument",
    FlowChartMultidocument => "flowChartMultidocument",
    FlowChartTerminator => "flowChartTerminator",
    FlowChartPreparation => "flowChartPreparation",
    FlowChartManualInput => "flowChartManualInput",
    FlowChartManualOperation => "flowChartManualOperation",
    FlowChartConnector => "flowChartConnector",
    FlowChartPunchedCard => "flowChartPunchedCard",
    FlowChartPunchedTape => "flowChartPunchedTape",
    FlowChartSummingJunction => "flowChartSummingJunction",
    FlowChartOr => "flowChartOr",
    FlowChartCollate => "flowChartCollate",
    FlowChartSort => "flowChartSort",
    FlowChartExtract => "flowChartExtract",
    FlowChartMerge => "flowChartMerge",
    FlowChartOfflineStorage => "flowChartOfflineStorage",
    FlowChartOnlineStorage => "flowChartOnlineStorage",
    FlowChartMagneticTape => "flowChartMagneticTape",
    FlowChartMagneticDisk => "flowChartMagneticDisk",
    FlowChartMagneticDrum => "flowChartMagneticDrum",
    FlowChartDisplay => "flowChartDisplay",
    FlowChartDelay => "flowChartDelay",
    FlowChartAlternateProcess => "flowChartAlternateProcess",
    FlowChartOffpageConnector => "flowChartOffpageConnector",
    ActionButtonBlank => "actionButtonBlank",
    ActionButtonHome => "actionButtonHome",
    ActionButtonHelp => "actionButtonHelp",
    ActionButtonInformation => "actionButtonInformation",
    ActionButtonForwardNext => "actionButtonForwardNext",
    ActionButtonBackPrevious => "actionButtonBackPrevious",
    ActionButtonEnd => "actionButtonEnd",
    ActionButtonBeginning => "actionButtonBeginning",
    ActionButtonReturn => "actionButtonReturn",
    ActionButtonDocument => "actionButtonDocument",
    ActionButtonSound => "actionButtonSound",
    ActionButtonMovie => "actionButtonMovie",
    Gear6 => "gear6",
    Gear9 => "gear9",
    Funnel => "funnel",
    MathPlus => "mathPlus",
    MathMinus => "mathMinus",
    MathMultiply => "mathMultiply",
    MathDivide => "mathDivide",
    MathEqual => "mathEqual",
    MathNotEqual => "mathNotEqual",
    CornerTabs => "cornerTabs",
    SquareTabs => "squareTabs",
    PlaqueTabs => "plaqueTabs",
    ChartX => "chartX",
    ChartStar => "chartStar",
    ChartPlus => "chartPlus",
}

impl fmt::Display for PresetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for [`PresetKind::from_str`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown preset kind: {0}")]
pub struct UnknownPreset(pub String);

impl FromStr for PresetKind {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PresetKind::from_name(s).ok_or_else(|| UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in PresetKind::ALL {
            assert_eq!(PresetKind::from_name(kind.name()), Some(*kind));
        }
    }

    #[test]
    fn catalog_is_complete() {
        assert_eq!(PresetKind::ALL.len(), 187);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!("actionButtonBackPrevious".parse::<PresetKind>(), Ok(PresetKind::ActionButtonBackPrevious));
        assert!("RightArrow".parse::<PresetKind>().is_err());
        assert!("".parse::<PresetKind>().is_err());
    }
}

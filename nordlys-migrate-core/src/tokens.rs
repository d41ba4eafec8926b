//! Design token conversion
//!
//! Legacy and target scales do not line up name-for-name: the tables below
//! are derived from pixel equivalence, and tokens with no larger target
//! counterpart clamp to the largest target token. The clamps are
//! intentional and must stay as they are.

use crate::diagnostics::{DiagnosticKind, DiagnosticSink};
use crate::render::js_string;

/// A static token value, as written in source.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A named token such as `xl` or `blue.500`
    Name(String),
    /// A numeric literal, kept as its source text
    Number(String),
}

impl Token {
    /// Render as a JS expression.
    pub fn to_js(&self) -> String {
        match self {
            Token::Name(name) => js_string(name),
            Token::Number(text) => text.clone(),
        }
    }

    fn text(&self) -> &str {
        match self {
            Token::Name(s) | Token::Number(s) => s,
        }
    }
}

/// Value-keyed map from a legacy scale to the target scale.
#[derive(Debug)]
pub struct ScaleMap {
    /// Scale name used in diagnostics
    pub name: &'static str,
    pub named: &'static [(&'static str, &'static str)],
    pub numeric: &'static [(f64, &'static str)],
}

impl ScaleMap {
    /// Look a token up without reporting misses.
    pub fn lookup(&self, token: &Token) -> Option<&'static str> {
        let text = token.text();
        if let Some((_, to)) = self.named.iter().find(|(from, _)| *from == text) {
            return Some(to);
        }
        let value: f64 = text.trim().parse().ok()?;
        self.numeric
            .iter()
            .find(|(from, _)| *from == value)
            .map(|(_, to)| *to)
    }
}

/// Convert `token` through `scale`.
///
/// A miss records one `unmapped-token` diagnostic and returns the token
/// unchanged.
pub fn convert(scale: &ScaleMap, token: &Token, sink: &mut dyn DiagnosticSink) -> Token {
    match scale.lookup(token) {
        Some(target) => Token::Name(target.to_string()),
        None => {
            sink.record(
                DiagnosticKind::UnmappedToken,
                format!(
                    "no {} mapping for token `{}`, passed through unchanged",
                    scale.name,
                    token.text()
                ),
            );
            token.clone()
        }
    }
}

/// Names the token scale a prop value is converted through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Spacing,
    Radius,
    IconSize,
    Align,
    Justify,
    AlertVariant,
    BadgeVariant,
}

impl Scale {
    pub fn map(self) -> &'static ScaleMap {
        match self {
            Scale::Spacing => &SPACING,
            Scale::Radius => &RADIUS,
            Scale::IconSize => &ICON_SIZE,
            Scale::Align => &ALIGN,
            Scale::Justify => &JUSTIFY,
            Scale::AlertVariant => &ALERT_VARIANT,
            Scale::BadgeVariant => &BADGE_VARIANT,
        }
    }
}

/// Legacy spacing (4px grid, named 8px..64px) to Nordlys spacing
/// (none, 3xs=2, 2xs=4, xs=8, sm=12, md=16, lg=20, xl=24, 2xl=32, 3xl=40,
/// 4xl=48, 5xl=64). 20 and 24 clamp to 5xl.
pub static SPACING: ScaleMap = ScaleMap {
    name: "spacing",
    named: &[
        ("xs", "xs"),
        ("sm", "sm"),
        ("md", "md"),
        ("lg", "xl"),
        ("xl", "2xl"),
        ("2xl", "3xl"),
        ("3xl", "4xl"),
        ("4xl", "5xl"),
    ],
    numeric: &[
        (0.0, "none"),
        (0.5, "3xs"),
        (1.0, "2xs"),
        (2.0, "xs"),
        (3.0, "sm"),
        (4.0, "md"),
        (5.0, "lg"),
        (6.0, "xl"),
        (8.0, "2xl"),
        (10.0, "3xl"),
        (12.0, "4xl"),
        (16.0, "5xl"),
        (20.0, "5xl"),
        (24.0, "5xl"),
    ],
};

/// Legacy radii (xs=2 .. 3xl=24) to Nordlys radii (xs=4, sm=8, md=12,
/// lg=16, xl=24).
pub static RADIUS: ScaleMap = ScaleMap {
    name: "radius",
    named: &[
        ("none", "none"),
        ("xs", "xs"),
        ("sm", "xs"),
        ("md", "sm"),
        ("lg", "sm"),
        ("xl", "md"),
        ("2xl", "lg"),
        ("3xl", "xl"),
        ("full", "full"),
    ],
    numeric: &[
        (0.0, "none"),
        (2.0, "xs"),
        (4.0, "xs"),
        (6.0, "sm"),
        (8.0, "sm"),
        (12.0, "md"),
        (16.0, "lg"),
        (24.0, "xl"),
        (9999.0, "full"),
    ],
};

/// Legacy icon sizes to the Nordlys icon scale (xs=10, sm=12, md=14,
/// lg=15, xl=16, 2xl=18, 3xl=24). Everything above 24px clamps to 3xl and
/// the legacy `2xs` (8px) clamps up to xs.
pub static ICON_SIZE: ScaleMap = ScaleMap {
    name: "icon size",
    named: &[
        ("2xs", "xs"),
        ("xs", "sm"),
        ("sm", "xl"),
        ("md", "2xl"),
        ("lg", "3xl"),
        ("xl", "3xl"),
        ("2xl", "3xl"),
    ],
    numeric: &[
        (10.0, "xs"),
        (12.0, "sm"),
        (14.0, "md"),
        (16.0, "xl"),
        (18.0, "2xl"),
        (20.0, "2xl"),
        (24.0, "3xl"),
        (32.0, "3xl"),
    ],
};

pub static ALIGN: ScaleMap = ScaleMap {
    name: "align",
    named: &[
        ("start", "flex-start"),
        ("end", "flex-end"),
        ("flex-start", "flex-start"),
        ("flex-end", "flex-end"),
        ("center", "center"),
        ("stretch", "stretch"),
        ("baseline", "baseline"),
    ],
    numeric: &[],
};

pub static JUSTIFY: ScaleMap = ScaleMap {
    name: "justify",
    named: &[
        ("start", "flex-start"),
        ("end", "flex-end"),
        ("flex-start", "flex-start"),
        ("flex-end", "flex-end"),
        ("center", "center"),
        ("between", "space-between"),
        ("around", "space-around"),
        ("evenly", "space-evenly"),
        ("space-between", "space-between"),
        ("space-around", "space-around"),
        ("space-evenly", "space-evenly"),
    ],
    numeric: &[],
};

pub static ALERT_VARIANT: ScaleMap = ScaleMap {
    name: "alert status",
    named: &[
        ("info", "info"),
        ("success", "success"),
        ("warning", "warning"),
        ("error", "danger"),
    ],
    numeric: &[],
};

pub static BADGE_VARIANT: ScaleMap = ScaleMap {
    name: "badge colour scheme",
    named: &[
        ("info", "info"),
        ("success", "success"),
        ("warning", "warning"),
        ("danger", "danger"),
        ("error", "danger"),
        ("coolGray", "neutral"),
        ("gray", "neutral"),
        ("primary", "brand"),
    ],
    numeric: &[],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Diagnostics;

    fn name(s: &str) -> Token {
        Token::Name(s.to_string())
    }

    fn number(s: &str) -> Token {
        Token::Number(s.to_string())
    }

    #[test]
    fn test_spacing_named_tokens_shift_up() {
        let mut diagnostics = Diagnostics::new();
        assert_eq!(convert(&SPACING, &name("xl"), &mut diagnostics), name("2xl"));
        assert_eq!(convert(&SPACING, &name("2xl"), &mut diagnostics), name("3xl"));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_spacing_numeric_tokens_clamp() {
        let mut diagnostics = Diagnostics::new();
        assert_eq!(convert(&SPACING, &number("4"), &mut diagnostics), name("md"));
        assert_eq!(convert(&SPACING, &number("0.5"), &mut diagnostics), name("3xs"));
        assert_eq!(convert(&SPACING, &number("24"), &mut diagnostics), name("5xl"));
        // String-typed numbers (`space="4"`) hit the numeric table too
        assert_eq!(convert(&SPACING, &name("4"), &mut diagnostics), name("md"));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_icon_size_18_maps_to_2xl() {
        let mut diagnostics = Diagnostics::new();
        assert_eq!(convert(&ICON_SIZE, &number("18"), &mut diagnostics), name("2xl"));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_radius_md() {
        let mut diagnostics = Diagnostics::new();
        assert_eq!(convert(&RADIUS, &name("md"), &mut diagnostics), name("sm"));
    }

    #[test]
    fn test_unknown_token_passes_through_with_one_warning() {
        let mut diagnostics = Diagnostics::new();
        assert_eq!(convert(&SPACING, &name("huge"), &mut diagnostics), name("huge"));
        assert_eq!(convert(&RADIUS, &number("7"), &mut diagnostics), number("7"));
        assert_eq!(diagnostics.count(DiagnosticKind::UnmappedToken), 2);
        assert!(diagnostics.entries()[0].message.contains("`huge`"));
    }

    #[test]
    fn test_keyword_maps() {
        let mut diagnostics = Diagnostics::new();
        assert_eq!(convert(&JUSTIFY, &name("between"), &mut diagnostics), name("space-between"));
        assert_eq!(convert(&ALIGN, &name("start"), &mut diagnostics), name("flex-start"));
        assert_eq!(convert(&ALERT_VARIANT, &name("error"), &mut diagnostics), name("danger"));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_token_to_js() {
        assert_eq!(name("2xl").to_js(), "'2xl'");
        assert_eq!(number("4").to_js(), "4");
    }
}

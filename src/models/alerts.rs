//! The four alert conditions the engine can raise.
//!
//! Titles are load-bearing: downstream alert routing matches on them by
//! name, so they must never change. Message templates carry `{{ticker}}`
//! and `{{close}}` placeholders that are substituted at dispatch time.

/// A named alert condition with its message template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertCondition {
    pub title: &'static str,
    pub template: &'static str,
}

pub const PRICE_ENTERED_ORDER_POOL: AlertCondition = AlertCondition {
    title: "Price Entered Order Pool",
    template: "{{ticker}}: price entered an order pool at {{close}}",
};

pub const PRICE_LEFT_RESISTANCE_ZONE: AlertCondition = AlertCondition {
    title: "Price Left Resistance Zone",
    template: "{{ticker}}: price left a resistance zone at {{close}}",
};

pub const PRICE_LEFT_SUPPORT_ZONE: AlertCondition = AlertCondition {
    title: "Price Left Support Zone",
    template: "{{ticker}}: price left a support zone at {{close}}",
};

pub const PRICE_LEFT_ORDER_POOL: AlertCondition = AlertCondition {
    title: "Price Left Order Pool",
    template: "{{ticker}}: price left an order pool at {{close}}",
};

impl AlertCondition {
    /// Substitute the placeholders and produce the message the host's
    /// notification system should deliver.
    pub fn render(&self, ticker: &str, close: f64) -> String {
        self.template
            .replace("{{ticker}}", ticker)
            .replace("{{close}}", &format!("{close}"))
    }
}

/// The per-bar evaluation of all four conditions. One instance per
/// `update()` call; the fixed field order is part of the determinism
/// contract for emitted alert sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertFlags {
    pub entered_pool: bool,
    pub left_resistance: bool,
    pub left_support: bool,
    pub left_pool: bool,
}

impl AlertFlags {
    pub fn any(&self) -> bool {
        self.entered_pool || self.left_resistance || self.left_support || self.left_pool
    }

    /// Conditions that fired this bar, in fixed declaration order.
    pub fn firing(&self) -> Vec<AlertCondition> {
        let mut out = Vec::new();
        if self.entered_pool {
            out.push(PRICE_ENTERED_ORDER_POOL);
        }
        if self.left_resistance {
            out.push(PRICE_LEFT_RESISTANCE_ZONE);
        }
        if self.left_support {
            out.push(PRICE_LEFT_SUPPORT_ZONE);
        }
        if self.left_pool {
            out.push(PRICE_LEFT_ORDER_POOL);
        }
        out
    }
}

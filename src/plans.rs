//! Static pricing catalog shown on the paywall.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub tier: &'static str,
    /// Price in rupees.
    pub price: u32,
    /// Undiscounted price in rupees, rendered struck through.
    pub list_price: u32,
    pub features: &'static [&'static str],
    pub call_to_action: &'static str,
    pub recommended: bool,
}

impl Plan {
    pub fn price_label(&self) -> String {
        format!("₹{}", self.price)
    }

    pub fn list_price_label(&self) -> String {
        format!("₹{}", self.list_price)
    }

    /// Whole-percent discount against the list price, rounded down.
    pub fn savings_percent(&self) -> u32 {
        if self.list_price == 0 || self.price >= self.list_price {
            return 0;
        }
        (self.list_price - self.price) * 100 / self.list_price
    }

    pub fn badge(&self) -> Option<String> {
        self.recommended
            .then(|| format!("BEST VALUE • SAVE {}%", self.savings_percent()))
    }
}

/// Recommended plan first, then the baseline one.
pub static PLANS: [Plan; 2] = [
    Plan {
        id: "enhanced",
        name: "7 Days Unlimited Access",
        tier: "Enhanced Plan",
        price: 99,
        list_price: 699,
        features: &[
            "Unlimited AI Consultations",
            "Personalized Care Plans",
            "Next-Best Action Steps",
            "Priority Board Processing",
        ],
        call_to_action: "Unlock Full Report",
        recommended: true,
    },
    Plan {
        id: "basic",
        name: "1 Session",
        tier: "Basic Plan",
        price: 49,
        list_price: 399,
        features: &["Single Diagnostic Report", "24/7 Access"],
        call_to_action: "Select Basic",
        recommended: false,
    },
];

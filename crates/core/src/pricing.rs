//! Subscription plan catalog and checkout-session creation.
//!
//! Checkout sessions are mock sessions: no payment provider is contacted.
//! The session id carries the provider's test prefix so the frontend's
//! redirect flow can be exercised end to end.

use serde::Serialize;

use crate::error::CoreError;

/// Prefix of every mock checkout session id.
pub const MOCK_SESSION_PREFIX: &str = "cs_test_";

/// Status of a freshly created checkout session.
pub const SESSION_STATUS_OPEN: &str = "open";

/// A subscription plan. `price` is in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u32,
    pub price_id: &'static str,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub popular: bool,
    pub features: &'static [&'static str],
}

const PLANS: &[Plan] = &[
    Plan {
        id: "starter",
        name: "Starter",
        price: 2000,
        price_id: "price_starter_monthly",
        popular: false,
        features: &[
            "5 books per month",
            "3 revisions per book",
            "2 audiobooks",
            "2 AI outline credits",
        ],
    },
    Plan {
        id: "professional",
        name: "Professional",
        price: 4900,
        price_id: "price_professional_monthly",
        popular: false,
        features: &[
            "15 books per month",
            "5 revisions per book",
            "7 audiobooks",
            "5 AI outline credits",
            "Marketplace access",
        ],
    },
    Plan {
        id: "creator",
        name: "Creator",
        price: 7900,
        price_id: "price_creator_monthly",
        popular: true,
        features: &[
            "30 books per month",
            "10 revisions per book",
            "15 audiobooks",
            "10 AI outline credits",
            "Advanced AI agents",
            "Priority support",
        ],
    },
    Plan {
        id: "publisher",
        name: "Publisher",
        price: 19900,
        price_id: "price_publisher_monthly",
        popular: false,
        features: &[
            "80 books per month",
            "12 revisions per book",
            "40 audiobooks",
            "Unlimited credits",
            "8 team members",
            "White-label option",
        ],
    },
];

/// Plan assigned to users created without one.
pub const DEFAULT_PLAN_ID: &str = "starter";

/// All plans in display order.
pub fn plans() -> &'static [Plan] {
    PLANS
}

/// Look up a plan by id.
pub fn find_plan(id: &str) -> Option<&'static Plan> {
    PLANS.iter().find(|p| p.id == id)
}

/// A checkout session handed back to the frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    pub id: String,
    pub status: &'static str,
    pub plan_id: &'static str,
    pub plan_name: &'static str,
}

/// Create a mock checkout session for the given plan.
pub fn create_checkout_session(plan_id: &str) -> Result<CheckoutSession, CoreError> {
    let plan = find_plan(plan_id)
        .ok_or_else(|| CoreError::Validation("Invalid plan selected".to_string()))?;
    Ok(CheckoutSession {
        id: format!("{MOCK_SESSION_PREFIX}{}", uuid::Uuid::new_v4().simple()),
        status: SESSION_STATUS_OPEN,
        plan_id: plan.id,
        plan_name: plan.name,
    })
}

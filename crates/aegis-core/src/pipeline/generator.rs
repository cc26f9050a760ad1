//! Synthetic social post generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{Platform, SocialPost};
use crate::error::DomainError;

/// Chance that a non-crisis template is replaced by a crisis message.
pub const DEFAULT_CRISIS_PROBABILITY: f64 = 0.05;

/// Tone a template was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateLabel {
    Positive,
    Negative,
    Neutral,
    NegativeCrisis,
}

/// A canned post body with its intended tone.
#[derive(Debug, Clone, Copy)]
pub struct PostTemplate {
    pub content: &'static str,
    pub label: TemplateLabel,
}

impl PostTemplate {
    const fn new(content: &'static str, label: TemplateLabel) -> Self {
        Self { content, label }
    }

    pub fn is_crisis(&self) -> bool {
        self.label == TemplateLabel::NegativeCrisis
    }
}

pub static TEMPLATES: [PostTemplate; 8] = [
    PostTemplate::new(
        "Just tried the new @AegisSocial feature, it's amazing! #aegis #innovation",
        TemplateLabel::Positive,
    ),
    PostTemplate::new(
        "My @AegisSocial app is not working after the update. So frustrating! #fail #bug",
        TemplateLabel::Negative,
    ),
    PostTemplate::new(
        "Anyone else having issues with @AegisSocial login? Seems to be down.",
        TemplateLabel::Negative,
    ),
    PostTemplate::new(
        "Thinking about the services offered by @AegisSocial.",
        TemplateLabel::Neutral,
    ),
    PostTemplate::new(
        "Wow, the customer service from @AegisSocial was so quick and helpful!",
        TemplateLabel::Positive,
    ),
    PostTemplate::new(
        "This is the worst app I've ever used. @AegisSocial is a complete disaster.",
        TemplateLabel::NegativeCrisis,
    ),
    PostTemplate::new(
        "Security alert! I think my @AegisSocial account data has been leaked! This is a scandal!",
        TemplateLabel::NegativeCrisis,
    ),
    PostTemplate::new(
        "Just read a great article about @AegisSocial's new features. #tech",
        TemplateLabel::Positive,
    ),
];

pub static CRISIS_MESSAGES: [&str; 3] = [
    "URGENT: @AegisSocial has a massive security flaw! My personal data was exposed! #DataBreach #PrivacyFail",
    "AVOID @AegisSocial! They charged my card twice and their support is a ghost town. This company is a scam. #ScamAlert",
    "The latest @AegisSocial update wiped all my saved data. Years of planning gone. Unacceptable! #DataLoss",
];

/// Builds randomized [`SocialPost`]s from the template set.
///
/// A crisis template always yields a crisis message. Any other template is
/// swapped for a crisis message with probability `crisis_probability`, so
/// crisis content is weighted twice.
pub struct PostGenerator<R = StdRng> {
    rng: R,
    crisis_probability: f64,
}

impl PostGenerator<StdRng> {
    /// Create a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for PostGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PostGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            crisis_probability: DEFAULT_CRISIS_PROBABILITY,
        }
    }

    pub fn with_crisis_probability(mut self, probability: f64) -> Result<Self, DomainError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(DomainError::Validation(format!(
                "crisis probability must be within [0, 1], got {probability}"
            )));
        }
        self.crisis_probability = probability;
        Ok(self)
    }

    /// Create one randomized post.
    pub fn next_post(&mut self) -> SocialPost {
        let template = TEMPLATES[self.rng.gen_range(0..TEMPLATES.len())];
        let content = self.compose(&template);
        let platform = Platform::ALL[self.rng.gen_range(0..Platform::ALL.len())];
        let author_id = format!("user_{}", self.rng.gen_range(1000..=9999));

        SocialPost::new(platform, content, author_id)
    }

    /// Pick the body for `template`, injecting a crisis message when due.
    pub fn compose(&mut self, template: &PostTemplate) -> &'static str {
        // The random draw only happens for non-crisis templates.
        if template.is_crisis() || self.rng.gen_bool(self.crisis_probability) {
            CRISIS_MESSAGES[self.rng.gen_range(0..CRISIS_MESSAGES.len())]
        } else {
            template.content
        }
    }
}

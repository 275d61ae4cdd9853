//! Locale term tables
//!
//! A term table names a [`Kinship`] classification. Tables only decide
//! wording; every shape decision is made by the rule engine.

mod english;
mod vietnamese;

pub use english::EnglishTerms;
pub use vietnamese::VietnameseTerms;

use kindred_domain::Gender;

use crate::config::Locale;
use crate::rules::{Affinity, BloodShape, Kinship};

/// Names kinship classifications in one locale
///
/// Returning `None` means the table has no term for the shape; the engine
/// then reports `"unknown"`.
pub trait KinshipTerms: Send + Sync {
    /// Locale implemented by this table
    fn locale(&self) -> Locale;

    /// Term for a member compared with themselves
    fn self_term(&self) -> String;

    /// Term for a spouse of the given gender
    fn spouse(&self, gender: Gender) -> Option<String>;

    /// Term for a blood relation
    fn blood(&self, shape: &BloodShape) -> Option<String>;

    /// Term for a relation through marriage
    fn in_law(&self, core: &BloodShape, affinity: &Affinity) -> Option<String>;

    /// Dispatch a classification to the matching term
    fn term(&self, kinship: &Kinship) -> Option<String> {
        match kinship {
            Kinship::Unknown => None,
            Kinship::SelfMember => Some(self.self_term()),
            Kinship::Spouse { gender } => self.spouse(*gender),
            Kinship::Blood(shape) => self.blood(shape),
            Kinship::InLaw { core, affinity } => self.in_law(core, affinity),
        }
    }
}

/// Term table for a locale
pub fn for_locale(locale: Locale) -> Box<dyn KinshipTerms> {
    match locale {
        Locale::English => Box::new(EnglishTerms),
        Locale::Vietnamese => Box::new(VietnameseTerms),
    }
}

/// Pick a word by gender
fn gendered(gender: Gender, male: &str, female: &str, neutral: &str) -> String {
    match gender {
        Gender::Male => male,
        Gender::Female => female,
        Gender::Unknown => neutral,
    }
    .to_string()
}

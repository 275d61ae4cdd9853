//! English kinship terms

use kindred_domain::Gender;

use super::{gendered, KinshipTerms};
use crate::config::Locale;
use crate::rules::{Affinity, BloodShape, Lineage, Seniority};

/// English term table
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishTerms;

impl KinshipTerms for EnglishTerms {
    fn locale(&self) -> Locale {
        Locale::English
    }

    fn self_term(&self) -> String {
        "self".to_string()
    }

    fn spouse(&self, gender: Gender) -> Option<String> {
        Some(gendered(gender, "husband", "wife", "spouse"))
    }

    fn blood(&self, shape: &BloodShape) -> Option<String> {
        let g = shape.gender;
        let term = match (shape.up, shape.down) {
            (0, 0) => return None,
            (n, 0) => with_side(shape.lineage, n >= 2, ancestor(n, g)),
            (0, n) => descendant(n, g),
            (1, 1) => {
                let sibling = gendered(g, "brother", "sister", "sibling");
                match shape.seniority {
                    Seniority::Elder => format!("elder {}", sibling),
                    Seniority::Younger => format!("younger {}", sibling),
                    Seniority::Unspecified => sibling,
                }
            }
            (n, 1) => {
                let base = match g {
                    Gender::Unknown => format!("{}'s sibling", ancestor(n - 1, g)),
                    _ => format!("{}{}", great(n - 2), gendered(g, "uncle", "aunt", "")),
                };
                with_side(shape.lineage, true, base)
            }
            (1, n) => match g {
                Gender::Unknown => format!("sibling's {}", descendant(n - 1, g)),
                _ if n == 2 => gendered(g, "nephew", "niece", ""),
                _ => format!("{}grand{}", great(n - 3), gendered(g, "nephew", "niece", "")),
            },
            (a, b) => cousin(a.min(b) - 1, a.abs_diff(b)),
        };
        Some(term)
    }

    fn in_law(&self, core: &BloodShape, affinity: &Affinity) -> Option<String> {
        // English in-law terms carry no elder/younger distinction
        let core = &core.with_seniority(Seniority::Unspecified);
        match (affinity.through_spouse, affinity.married_in) {
            (None, None) => self.blood(core),

            // Relative of the reference's spouse
            (Some(_), None) => {
                let g = core.gender;
                match (core.up, core.down) {
                    (0, n) => Some(format!("step{}", descendant(n, g))),
                    _ => self.blood(&core.with_lineage(Lineage::Unspecified)).map(in_law_form),
                }
            }

            // Spouse of a blood relative of the reference
            (None, Some(g)) => {
                let named = core.with_gender(g);
                match (core.up, core.down) {
                    (1, 0) => Some(gendered(g, "stepfather", "stepmother", "step-parent")),
                    (n, 0) => Some(format!("step-{}", ancestor(n, g))),
                    _ => self.blood(&named).map(in_law_form),
                }
            }

            (Some(_), Some(g)) => match (core.up, core.down) {
                (1, 1) => Some(gendered(
                    g,
                    "co-brother-in-law",
                    "co-sister-in-law",
                    "co-sibling-in-law",
                )),
                _ => self
                    .blood(&core.with_gender(g).with_lineage(Lineage::Unspecified))
                    .map(in_law_form),
            },
        }
    }
}

fn great(count: u8) -> String {
    "great-".repeat(usize::from(count))
}

fn ancestor(n: u8, g: Gender) -> String {
    match n {
        1 => gendered(g, "father", "mother", "parent"),
        _ => format!("{}grand{}", great(n - 2), gendered(g, "father", "mother", "parent")),
    }
}

fn descendant(n: u8, g: Gender) -> String {
    match n {
        1 => gendered(g, "son", "daughter", "child"),
        _ => format!("{}grand{}", great(n - 2), gendered(g, "son", "daughter", "child")),
    }
}

fn with_side(lineage: Lineage, applies: bool, term: String) -> String {
    match (applies, lineage) {
        (true, Lineage::Paternal) => format!("paternal {}", term),
        (true, Lineage::Maternal) => format!("maternal {}", term),
        _ => term,
    }
}

fn cousin(degree: u8, removed: u8) -> String {
    let base = format!("{} cousin", ordinal(degree));
    match removed {
        0 => base,
        1 => format!("{} once removed", base),
        2 => format!("{} twice removed", base),
        n => format!("{} {} times removed", base, n),
    }
}

fn ordinal(n: u8) -> String {
    match n {
        1 => "first".to_string(),
        2 => "second".to_string(),
        3 => "third".to_string(),
        4 => "fourth".to_string(),
        5 => "fifth".to_string(),
        _ => {
            let suffix = match (n % 10, n % 100) {
                (_, 11..=13) => "th",
                (1, _) => "st",
                (2, _) => "nd",
                (3, _) => "rd",
                _ => "th",
            };
            format!("{}{}", n, suffix)
        }
    }
}

fn in_law_form(term: String) -> String {
    if term.contains("cousin") {
        format!("{} by marriage", term)
    } else {
        format!("{}-in-law", term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blood(
        up: u8,
        down: u8,
        gender: Gender,
        lineage: Lineage,
        seniority: Seniority,
    ) -> Option<String> {
        EnglishTerms.blood(
            &BloodShape::new(up, down, gender)
                .with_lineage(lineage)
                .with_seniority(seniority),
        )
    }

    #[test]
    fn test_blood_table() {
        use Gender::*;
        use Lineage::*;
        use Seniority::Unspecified as Even;

        let cases: &[(u8, u8, Gender, Lineage, Seniority, &str)] = &[
            (1, 0, Male, Paternal, Even, "father"),
            (1, 0, Female, Maternal, Even, "mother"),
            (1, 0, Unknown, Paternal, Even, "parent"),
            (2, 0, Male, Paternal, Even, "paternal grandfather"),
            (2, 0, Female, Maternal, Even, "maternal grandmother"),
            (3, 0, Male, Maternal, Even, "maternal great-grandfather"),
            (4, 0, Female, Lineage::Unspecified, Even, "great-great-grandmother"),
            (0, 1, Male, Paternal, Even, "son"),
            (0, 1, Unknown, Lineage::Unspecified, Even, "child"),
            (0, 2, Female, Maternal, Even, "granddaughter"),
            (0, 3, Male, Paternal, Even, "great-grandson"),
            (1, 1, Male, Paternal, Even, "brother"),
            (1, 1, Female, Paternal, Seniority::Elder, "elder sister"),
            (1, 1, Unknown, Paternal, Seniority::Younger, "younger sibling"),
            (2, 1, Male, Paternal, Even, "paternal uncle"),
            (2, 1, Female, Maternal, Even, "maternal aunt"),
            (2, 1, Unknown, Maternal, Even, "maternal parent's sibling"),
            (3, 1, Male, Paternal, Even, "paternal great-uncle"),
            (4, 1, Female, Maternal, Even, "maternal great-great-aunt"),
            (1, 2, Male, Paternal, Even, "nephew"),
            (1, 2, Female, Paternal, Even, "niece"),
            (1, 3, Male, Paternal, Even, "grandnephew"),
            (1, 4, Female, Paternal, Even, "great-grandniece"),
            (1, 2, Unknown, Paternal, Even, "sibling's child"),
            (2, 2, Male, Paternal, Even, "first cousin"),
            (3, 3, Female, Maternal, Even, "second cousin"),
            (3, 2, Male, Paternal, Even, "first cousin once removed"),
            (2, 4, Male, Paternal, Even, "first cousin twice removed"),
            (5, 2, Male, Paternal, Even, "first cousin 3 times removed"),
        ];

        for &(up, down, gender, lineage, seniority, expected) in cases {
            assert_eq!(
                blood(up, down, gender, lineage, seniority).as_deref(),
                Some(expected),
                "shape ({}, {}) {:?} {:?} {:?}",
                up,
                down,
                gender,
                lineage,
                seniority
            );
        }
    }

    #[test]
    fn test_zero_shape_has_no_term() {
        assert_eq!(blood(0, 0, Gender::Male, Lineage::Unspecified, Seniority::Unspecified), None);
    }

    #[test]
    fn test_in_law_table() {
        let spouse_side = |up, down, gender| {
            EnglishTerms.in_law(
                &BloodShape::new(up, down, gender).with_lineage(Lineage::Paternal),
                &Affinity {
                    through_spouse: Some(Gender::Female),
                    married_in: None,
                },
            )
        };
        assert_eq!(spouse_side(1, 0, Gender::Male).as_deref(), Some("father-in-law"));
        assert_eq!(spouse_side(1, 1, Gender::Female).as_deref(), Some("sister-in-law"));
        assert_eq!(spouse_side(0, 1, Gender::Male).as_deref(), Some("stepson"));
        assert_eq!(spouse_side(2, 0, Gender::Female).as_deref(), Some("grandmother-in-law"));
        assert_eq!(spouse_side(2, 2, Gender::Male).as_deref(), Some("first cousin by marriage"));

        let married_in = |up, down, gender| {
            EnglishTerms.in_law(
                &BloodShape::new(up, down, Gender::Male).with_lineage(Lineage::Paternal),
                &Affinity {
                    through_spouse: None,
                    married_in: Some(gender),
                },
            )
        };
        assert_eq!(married_in(0, 1, Gender::Female).as_deref(), Some("daughter-in-law"));
        assert_eq!(married_in(0, 1, Gender::Male).as_deref(), Some("son-in-law"));
        assert_eq!(married_in(1, 1, Gender::Female).as_deref(), Some("sister-in-law"));
        assert_eq!(married_in(1, 0, Gender::Female).as_deref(), Some("stepmother"));
        assert_eq!(married_in(2, 0, Gender::Male).as_deref(), Some("step-grandfather"));
        assert_eq!(married_in(2, 1, Gender::Female).as_deref(), Some("paternal aunt-in-law"));
        assert_eq!(married_in(0, 2, Gender::Male).as_deref(), Some("grandson-in-law"));

        let both = EnglishTerms.in_law(
            &BloodShape::new(1, 1, Gender::Male),
            &Affinity {
                through_spouse: Some(Gender::Male),
                married_in: Some(Gender::Female),
            },
        );
        assert_eq!(both.as_deref(), Some("co-sister-in-law"));
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(ordinal(6), "6th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(22), "22nd");
    }
}

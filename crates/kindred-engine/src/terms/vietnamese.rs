//! Vietnamese kinship terms
//!
//! Vietnamese distinguishes the father's side (nội) from the mother's side
//! (ngoại), and names collateral relatives by the seniority of their branch:
//! a father's elder brother is bác, his younger brother chú. Cousins inherit
//! seniority from their parents' birth order, not from their own age.

use kindred_domain::Gender;

use super::{gendered, KinshipTerms};
use crate::config::Locale;
use crate::rules::{Affinity, BloodShape, Lineage, Seniority};

/// Vietnamese term table
#[derive(Debug, Clone, Copy, Default)]
pub struct VietnameseTerms;

impl KinshipTerms for VietnameseTerms {
    fn locale(&self) -> Locale {
        Locale::Vietnamese
    }

    fn self_term(&self) -> String {
        "bản thân".to_string()
    }

    fn spouse(&self, gender: Gender) -> Option<String> {
        Some(gendered(gender, "chồng", "vợ", "vợ/chồng"))
    }

    fn blood(&self, shape: &BloodShape) -> Option<String> {
        let g = shape.gender;
        match (shape.up, shape.down) {
            (0, 0) => None,
            (n, 0) => ancestor(n, g, shape.lineage),
            (0, n) => descendant(n, g, shape.lineage),
            (1, 1) => Some(sibling(g, shape.seniority)),
            (2, 1) => uncle(shape.branch, shape.seniority, g),
            (3, 1) => {
                let prefix = gendered(g, "ông", "bà", "");
                uncle(shape.branch, shape.seniority, g)
                    .filter(|_| g != Gender::Unknown)
                    .map(|term| format!("{} {}", prefix, term))
            }
            (1, 2) => Some(gendered(g, "cháu trai", "cháu gái", "cháu")),
            (1, 3) => Some("chắt".to_string()),
            (1, 4) => Some("chút".to_string()),
            (a, b) if a == b && a >= 2 => Some(cousin(g, shape.seniority)),
            (a, b) if b >= 2 && a.checked_sub(b) == Some(1) => {
                uncle(shape.lineage, shape.seniority, g).map(|term| format!("{} họ", term))
            }
            (a, b) if b >= 2 && a.checked_sub(b) == Some(2) => {
                Some(gendered(g, "ông họ", "bà họ", "ông bà họ"))
            }
            (a, b) if a >= 2 && b.checked_sub(a) == Some(1) => Some("cháu họ".to_string()),
            (a, b) if a >= 2 && b.checked_sub(a) == Some(2) => Some("chắt họ".to_string()),
            _ => None,
        }
    }

    fn in_law(&self, core: &BloodShape, affinity: &Affinity) -> Option<String> {
        match (affinity.through_spouse, affinity.married_in) {
            (None, None) => self.blood(core),
            (Some(spouse), None) => self.spouse_side(core, spouse),
            (None, Some(g)) => self.married_in(core, g),
            (Some(spouse), Some(g)) => self
                .spouse_side(core, spouse)
                .map(|relative| format!("{} của {}", spouse_word(g), relative)),
        }
    }
}

impl VietnameseTerms {
    /// Blood relative of the reference's spouse: "bố chồng", "em vợ", ...
    fn spouse_side(&self, core: &BloodShape, spouse: Gender) -> Option<String> {
        let side = match spouse {
            Gender::Male => "chồng",
            Gender::Female => "vợ",
            Gender::Unknown => return None,
        };
        match (core.up, core.down) {
            (0, 1) => Some(format!("con riêng của {}", side)),
            (1, 1) => Some(format!("{} {}", short_sibling(core.gender, core.seniority), side)),
            _ => self.blood(core).map(|term| format!("{} {}", term, side)),
        }
    }

    /// Spouse of a blood relative: "con dâu", "anh rể", "thím", ...
    fn married_in(&self, core: &BloodShape, g: Gender) -> Option<String> {
        let by_marriage = |son_in_law: &str, daughter_in_law: &str| match g {
            Gender::Male => Some(son_in_law.to_string()),
            Gender::Female => Some(daughter_in_law.to_string()),
            Gender::Unknown => None,
        };

        let specific = match (core.up, core.down) {
            (1, 0) => by_marriage("bố dượng", "mẹ kế"),
            (0, 1) => by_marriage("con rể", "con dâu"),
            (0, 2) | (1, 2) => by_marriage("cháu rể", "cháu dâu"),
            (1, 1) => match core.seniority {
                Seniority::Elder => by_marriage("anh rể", "chị dâu"),
                Seniority::Younger => by_marriage("em rể", "em dâu"),
                Seniority::Unspecified => by_marriage("anh/em rể", "chị/em dâu"),
            },
            (2, 1) => uncle(core.branch, core.seniority, core.gender).and_then(|relative| {
                match (relative.as_str(), g) {
                    ("bác", Gender::Female) => Some("bác gái".to_string()),
                    ("bác", Gender::Male) => Some("bác trai".to_string()),
                    ("chú", Gender::Female) => Some("thím".to_string()),
                    ("cậu", Gender::Female) => Some("mợ".to_string()),
                    ("cô" | "dì", Gender::Male) => Some("dượng".to_string()),
                    _ => None,
                }
            }),
            _ => None,
        };

        specific.or_else(|| {
            self.blood(core)
                .map(|relative| format!("{} của {}", spouse_word(g), relative))
        })
    }
}

fn spouse_word(g: Gender) -> String {
    gendered(g, "chồng", "vợ", "vợ/chồng")
}

fn side_suffix(lineage: Lineage) -> &'static str {
    match lineage {
        Lineage::Paternal => " nội",
        Lineage::Maternal => " ngoại",
        Lineage::Unspecified => "",
    }
}

fn ancestor(n: u8, g: Gender, lineage: Lineage) -> Option<String> {
    let base = match n {
        1 => return Some(gendered(g, "bố", "mẹ", "bố/mẹ")),
        2 => gendered(g, "ông", "bà", "ông/bà"),
        3 => gendered(g, "cụ ông", "cụ bà", "cụ"),
        4 => gendered(g, "kỵ ông", "kỵ bà", "kỵ"),
        _ => return Some(format!("tổ tiên đời thứ {}", n)),
    };
    Some(format!("{}{}", base, side_suffix(lineage)))
}

fn descendant(n: u8, g: Gender, lineage: Lineage) -> Option<String> {
    let base = match n {
        1 => return Some(gendered(g, "con trai", "con gái", "con")),
        2 => "cháu",
        3 => "chắt",
        4 => "chút",
        _ => return Some(format!("cháu đời thứ {}", n)),
    };
    Some(format!("{}{}", base, side_suffix(lineage)))
}

fn sibling(g: Gender, seniority: Seniority) -> String {
    match seniority {
        Seniority::Elder => gendered(g, "anh trai", "chị gái", "anh/chị"),
        Seniority::Younger => gendered(g, "em trai", "em gái", "em"),
        Seniority::Unspecified => gendered(g, "anh em trai", "chị em gái", "anh chị em"),
    }
}

/// Sibling word used in compounds such as "anh chồng"
fn short_sibling(g: Gender, seniority: Seniority) -> String {
    match seniority {
        Seniority::Elder => gendered(g, "anh", "chị", "anh/chị"),
        Seniority::Younger => "em".to_string(),
        Seniority::Unspecified => gendered(g, "anh/em", "chị/em", "anh chị em"),
    }
}

/// Parent's sibling, by side and seniority against the parent
fn uncle(side: Lineage, seniority: Seniority, g: Gender) -> Option<String> {
    let term = match (side, g, seniority) {
        (Lineage::Paternal, Gender::Male, Seniority::Elder) => "bác",
        (Lineage::Paternal, Gender::Male, Seniority::Younger) => "chú",
        (Lineage::Paternal, Gender::Male, Seniority::Unspecified) => "bác/chú",
        (Lineage::Paternal, Gender::Female, Seniority::Elder) => "bác",
        (Lineage::Paternal, Gender::Female, _) => "cô",
        (Lineage::Paternal, Gender::Unknown, Seniority::Elder) => "bác",
        (Lineage::Paternal, Gender::Unknown, _) => "chú/cô",
        (Lineage::Maternal, Gender::Male, _) => "cậu",
        (Lineage::Maternal, Gender::Female, _) => "dì",
        (Lineage::Maternal, Gender::Unknown, _) => "cậu/dì",
        (Lineage::Unspecified, _, _) => return None,
    };
    Some(term.to_string())
}

fn cousin(g: Gender, seniority: Seniority) -> String {
    match seniority {
        Seniority::Elder => gendered(g, "anh họ", "chị họ", "anh/chị họ"),
        Seniority::Younger => "em họ".to_string(),
        Seniority::Unspecified => "anh chị em họ".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(
        up: u8,
        down: u8,
        gender: Gender,
        lineage: Lineage,
        seniority: Seniority,
    ) -> BloodShape {
        BloodShape::new(up, down, gender)
            .with_lineage(lineage)
            .with_seniority(seniority)
    }

    #[test]
    fn test_blood_table() {
        use Gender::*;
        use Lineage::*;
        use Seniority::{Elder, Younger};
        let even = Seniority::Unspecified;

        let cases: &[(u8, u8, Gender, Lineage, Seniority, &str)] = &[
            (1, 0, Male, Paternal, even, "bố"),
            (1, 0, Female, Maternal, even, "mẹ"),
            (2, 0, Male, Paternal, even, "ông nội"),
            (2, 0, Female, Paternal, even, "bà nội"),
            (2, 0, Male, Maternal, even, "ông ngoại"),
            (2, 0, Female, Maternal, even, "bà ngoại"),
            (3, 0, Female, Paternal, even, "cụ bà nội"),
            (4, 0, Male, Maternal, even, "kỵ ông ngoại"),
            (0, 1, Male, Paternal, even, "con trai"),
            (0, 1, Female, Maternal, even, "con gái"),
            (0, 2, Male, Paternal, even, "cháu nội"),
            (0, 2, Female, Maternal, even, "cháu ngoại"),
            (0, 3, Male, Paternal, even, "chắt nội"),
            (1, 1, Male, Paternal, Elder, "anh trai"),
            (1, 1, Female, Paternal, Elder, "chị gái"),
            (1, 1, Male, Paternal, Younger, "em trai"),
            (1, 1, Female, Paternal, Younger, "em gái"),
            (2, 1, Male, Paternal, Elder, "bác"),
            (2, 1, Male, Paternal, Younger, "chú"),
            (2, 1, Female, Paternal, Younger, "cô"),
            (2, 1, Male, Maternal, Elder, "cậu"),
            (2, 1, Female, Maternal, Younger, "dì"),
            (3, 1, Male, Paternal, Younger, "ông chú"),
            (3, 1, Female, Maternal, Elder, "bà dì"),
            (1, 2, Male, Paternal, even, "cháu trai"),
            (1, 3, Female, Paternal, even, "chắt"),
            (2, 2, Male, Paternal, Elder, "anh họ"),
            (2, 2, Female, Maternal, Elder, "chị họ"),
            (3, 3, Female, Paternal, Younger, "em họ"),
            (3, 2, Male, Paternal, Younger, "chú họ"),
            (3, 2, Female, Maternal, Elder, "dì họ"),
            (4, 2, Male, Paternal, even, "ông họ"),
            (2, 3, Male, Paternal, even, "cháu họ"),
        ];

        for &(up, down, gender, lineage, seniority, expected) in cases {
            assert_eq!(
                VietnameseTerms.blood(&shape(up, down, gender, lineage, seniority)).as_deref(),
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
    fn test_great_uncle_uses_branch() {
        // Father's mother's younger brother: paternal lineage, maternal branch
        let s = shape(3, 1, Gender::Male, Lineage::Paternal, Seniority::Younger)
            .with_branch(Lineage::Maternal);
        assert_eq!(VietnameseTerms.blood(&s).as_deref(), Some("ông cậu"));
    }

    #[test]
    fn test_unsupported_shapes() {
        let s = shape(2, 6, Gender::Male, Lineage::Paternal, Seniority::Unspecified);
        assert_eq!(VietnameseTerms.blood(&s), None);
        let s = shape(1, 5, Gender::Male, Lineage::Paternal, Seniority::Unspecified);
        assert_eq!(VietnameseTerms.blood(&s), None);
    }

    #[test]
    fn test_widest_shapes_do_not_overflow() {
        for (up, down) in [(255, 2), (2, 255), (255, 255), (255, 254), (254, 255), (255, 253)] {
            let s = shape(up, down, Gender::Male, Lineage::Paternal, Seniority::Elder);
            let _ = VietnameseTerms.blood(&s);
            let _ = VietnameseTerms.in_law(
                &s,
                &Affinity {
                    through_spouse: Some(Gender::Female),
                    married_in: None,
                },
            );
        }
        let s = shape(255, 2, Gender::Male, Lineage::Paternal, Seniority::Unspecified);
        assert_eq!(VietnameseTerms.blood(&s), None);
        let s = shape(255, 254, Gender::Male, Lineage::Paternal, Seniority::Younger);
        assert_eq!(VietnameseTerms.blood(&s).as_deref(), Some("chú họ"));
    }

    #[test]
    fn test_in_law_table() {
        let through = |up, down, gender, seniority, spouse| {
            VietnameseTerms.in_law(
                &shape(up, down, gender, Lineage::Paternal, seniority),
                &Affinity {
                    through_spouse: Some(spouse),
                    married_in: None,
                },
            )
        };
        let even = Seniority::Unspecified;
        let (elder, younger) = (Seniority::Elder, Seniority::Younger);
        let (m, f) = (Gender::Male, Gender::Female);
        assert_eq!(through(1, 0, m, even, m).as_deref(), Some("bố chồng"));
        assert_eq!(through(1, 0, f, even, f).as_deref(), Some("mẹ vợ"));
        assert_eq!(through(1, 1, m, elder, m).as_deref(), Some("anh chồng"));
        assert_eq!(through(1, 1, f, younger, f).as_deref(), Some("em vợ"));
        assert_eq!(through(0, 1, m, even, f).as_deref(), Some("con riêng của vợ"));

        let married = |up, down, relative, seniority, gender| {
            VietnameseTerms.in_law(
                &shape(up, down, relative, Lineage::Paternal, seniority),
                &Affinity {
                    through_spouse: None,
                    married_in: Some(gender),
                },
            )
        };
        assert_eq!(married(0, 1, m, even, f).as_deref(), Some("con dâu"));
        assert_eq!(married(0, 1, f, even, m).as_deref(), Some("con rể"));
        assert_eq!(married(1, 1, m, elder, f).as_deref(), Some("chị dâu"));
        assert_eq!(married(1, 1, f, elder, m).as_deref(), Some("anh rể"));
        assert_eq!(married(1, 1, m, younger, f).as_deref(), Some("em dâu"));
        assert_eq!(married(2, 1, m, younger, f).as_deref(), Some("thím"));
        assert_eq!(married(2, 1, f, younger, m).as_deref(), Some("dượng"));
        assert_eq!(married(1, 0, f, even, m).as_deref(), Some("bố dượng"));
        assert_eq!(married(2, 2, m, elder, f).as_deref(), Some("vợ của anh họ"));
    }
}

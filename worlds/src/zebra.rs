//! The Zebra puzzle as a CSP over house numbers `1..=5`.
//!
//! Five houses in a row, each with one colour, pet, drink, nationality and
//! brand of cigarette. Each attribute value is a variable whose value is
//! the house it belongs to.

use cairn_csp::{Csp, CspError, VarId};

pub const COLOURS: [&str; 5] = ["Red", "Yellow", "Blue", "Green", "Ivory"];
pub const PETS: [&str; 5] = ["Dog", "Fox", "Snails", "Horse", "Zebra"];
pub const DRINKS: [&str; 5] = ["OJ", "Tea", "Coffee", "Milk", "Water"];
pub const NATIONS: [&str; 5] = ["Englishman", "Spaniard", "Norwegian", "Ukrainian", "Japanese"];
pub const SMOKES: [&str; 5] = ["Kools", "Chesterfields", "Winston", "LuckyStrike", "Parliaments"];

#[derive(Debug, Clone, Copy)]
enum Relation {
    SameHouse,
    NextTo,
    /// The first is immediately right of the second.
    RightOf,
}

const CLUES: &[(&str, Relation, &str)] = &[
    ("Englishman", Relation::SameHouse, "Red"),
    ("Spaniard", Relation::SameHouse, "Dog"),
    ("Kools", Relation::SameHouse, "Yellow"),
    ("Chesterfields", Relation::NextTo, "Fox"),
    ("Norwegian", Relation::NextTo, "Blue"),
    ("Winston", Relation::SameHouse, "Snails"),
    ("LuckyStrike", Relation::SameHouse, "OJ"),
    ("Ukrainian", Relation::SameHouse, "Tea"),
    ("Japanese", Relation::SameHouse, "Parliaments"),
    ("Kools", Relation::NextTo, "Horse"),
    ("Coffee", Relation::SameHouse, "Green"),
    ("Green", Relation::RightOf, "Ivory"),
];

/// Build the puzzle. The Norwegian lives in the first house and milk is
/// drunk in the middle one; these facts are encoded as domains.
///
/// # Errors
///
/// Propagates model construction errors; none occur for this fixed model.
pub fn zebra() -> Result<Csp<u8>, CspError> {
    let mut csp: Csp<u8> = Csp::new();
    for group in [COLOURS, PETS, DRINKS, NATIONS, SMOKES] {
        let vars = group
            .iter()
            .map(|&name| {
                let domain = match name {
                    "Norwegian" => vec![1],
                    "Milk" => vec![3],
                    _ => (1..=5).collect(),
                };
                csp.add_variable(name, domain)
            })
            .collect::<Result<Vec<VarId>, _>>()?;
        csp.add_all_different(&vars)?;
    }
    add_clues(&mut csp, CLUES)?;
    Ok(csp)
}

fn add_clues(csp: &mut Csp<u8>, clues: &[(&str, Relation, &str)]) -> Result<(), CspError> {
    for &(a, relation, b) in clues {
        let a = csp.require_var(a)?;
        let b = csp.require_var(b)?;
        match relation {
            Relation::SameHouse => csp.add_constraint(a, b, |x, y| x == y)?,
            Relation::NextTo => csp.add_constraint(a, b, |x, y| x.abs_diff(*y) == 1)?,
            Relation::RightOf => csp.add_constraint(a, b, |x, y| *x == y + 1)?,
        }
    }
    Ok(())
}

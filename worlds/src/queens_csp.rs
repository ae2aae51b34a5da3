//! N-Queens as a CSP: one variable per column, valued by row.

use cairn_csp::{Csp, CspError, VarId};

/// Variables `Q0..Q{n-1}` over rows `0..n`, pairwise non-attacking.
///
/// # Errors
///
/// Propagates model construction errors; none occur for valid `n`.
pub fn queens_csp(n: usize) -> Result<Csp<usize>, CspError> {
    let mut csp: Csp<usize> = Csp::new();
    let columns = (0..n)
        .map(|c| csp.add_variable(&format!("Q{c}"), (0..n).collect()))
        .collect::<Result<Vec<VarId>, _>>()?;
    for (i, &a) in columns.iter().enumerate() {
        for (j, &b) in columns.iter().enumerate().skip(i + 1) {
            let gap = j - i;
            csp.add_constraint(a, b, move |ra: &usize, rb: &usize| {
                ra != rb && ra.abs_diff(*rb) != gap
            })?;
        }
    }
    Ok(csp)
}

/// Rows of a solved assignment, by column.
#[must_use]
pub fn rows(csp: &Csp<usize>, assignment: &cairn_csp::Assignment<usize>) -> Option<Vec<usize>> {
    csp.variables()
        .map(|var| assignment.get(var).copied())
        .collect()
}

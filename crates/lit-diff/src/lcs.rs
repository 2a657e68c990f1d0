//! Line-level LCS diffing — `spec.md` §4.2.
//!
//! The textbook backward-fill DP, ported from the original `lit`'s
//! `src/diff.c::lcs`: a table of size `(m+1)×(n+1)`, each cell `1 + diag` on
//! a match, else the max of the cell to the right and the cell below. On a
//! tie between right and down, the backtrack consumes from `a` first (the
//! `"-"` branch), which is what makes the output deterministic.

/// Annotate `a` (prior) against `b` (current). Every line of `a` is kept
/// (`" "` prefix) or removed (`"- "`); every line of `b` is kept or added
/// (`"+ "`); the kept lines form a longest common subsequence.
pub fn lcs_annotate(a: &[String], b: &[String]) -> Vec<String> {
    let m = a.len();
    let n = b.len();

    let mut dp = vec![vec![0u32; n + 1]; m + 1];
    for i in (0..m).rev() {
        for j in (0..n).rev() {
            dp[i][j] = if a[i] == b[j] {
                1 + dp[i + 1][j + 1]
            } else {
                dp[i + 1][j].max(dp[i][j + 1])
            };
        }
    }

    let mut out = Vec::with_capacity(m + n);
    let (mut i, mut j) = (0usize, 0usize);
    while i < m && j < n {
        if a[i] == b[j] {
            out.push(format!(" {}", a[i]));
            i += 1;
            j += 1;
        } else if dp[i + 1][j] >= dp[i][j + 1] {
            out.push(format!("- {}", a[i]));
            i += 1;
        } else {
            out.push(format!("+ {}", b[j]));
            j += 1;
        }
    }
    while i < m {
        out.push(format!("- {}", a[i]));
        i += 1;
    }
    while j < n {
        out.push(format!("+ {}", b[j]));
        j += 1;
    }
    out
}

/// Keep `" X"` and `"+ X"`, drop `"- X"` — the state after the change.
pub fn forward_materialise(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter(|l| !l.starts_with("- "))
        .map(|l| strip_prefix(l))
        .collect()
}

/// Keep `" X"` and `"- X"`, drop `"+ X"` — the state before the change.
pub fn inverse_materialise(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter(|l| !l.starts_with("+ "))
        .map(|l| strip_prefix(l))
        .collect()
}

fn strip_prefix(line: &str) -> String {
    if let Some(rest) = line.strip_prefix("+ ").or_else(|| line.strip_prefix("- ")) {
        rest.to_string()
    } else if let Some(rest) = line.strip_prefix(' ') {
        rest.to_string()
    } else {
        line.to_string()
    }
}

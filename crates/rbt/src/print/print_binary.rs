use super::types::PrintChild;

/// Renders the left and right branches of a binary node, one per line,
/// as `← left` and `→ right` under `tab`. Missing children are skipped.
pub fn print_binary(tab: &str, children: [Option<&PrintChild<'_>>; 2]) -> String {
    let child_tab = format!("{tab}  ");
    let mut out = String::new();
    for (arrow, child) in ["← ", "→ "].into_iter().zip(children) {
        let Some(child) = child else {
            continue;
        };
        out.push('\n');
        out.push_str(tab);
        out.push_str(arrow);
        out.push_str(&child(&child_tab));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_children() {
        let left = |tab: &str| format!("L({tab})");
        let right = |tab: &str| format!("R({tab})");
        let children: [Option<&PrintChild<'_>>; 2] = [Some(&left), Some(&right)];
        let out = print_binary("--", children);
        assert_eq!(out, "\n--← L(--  )\n--→ R(--  )");
    }

    #[test]
    fn missing_child_is_skipped() {
        let right = |_tab: &str| "R".to_string();
        let children: [Option<&PrintChild<'_>>; 2] = [None, Some(&right)];
        let out = print_binary("", children);
        assert_eq!(out, "\n→ R");
        assert_eq!(print_binary("", [None, None]), "");
    }
}

#[allow(unused_macros)]

macro_rules! run_tests {
    ($patterns:expr, $valids:expr, $invalids:expr) => {{
        $patterns.iter().for_each(|pattern: &Pattern| {
            let design = pattern.to_nfa_design();
            $valids.iter().for_each(|s: &&str| {
                assert!(
                    design.accepts(s.chars()),
                    r#"{} failed to match "{}""#,
                    pattern.inspect(),
                    s
                );
                assert!(
                    pattern.matches(s),
                    r#"{} failed to match "{}" on recompile"#,
                    pattern.inspect(),
                    s
                );
            });
            $invalids.iter().for_each(|s: &&str| {
                assert_eq!(
                    design.accepts(s.chars()),
                    false,
                    r#"{} matched "{}""#,
                    pattern.inspect(),
                    s
                );
                assert_eq!(
                    pattern.matches(s),
                    false,
                    r#"{} matched "{}" on recompile"#,
                    pattern.inspect(),
                    s
                );
            });
        })
    }};
}

use thompson::Pattern;

include!("macros.rs");

fn lit(c: char) -> Pattern {
    Pattern::literal(c)
}

fn seq(s: &str) -> Pattern {
    s.chars()
        .map(Pattern::literal)
        .fold(Pattern::empty(), Pattern::concatenate)
}

#[test]
fn test_composite() {
    // (ab|ac)*
    let patterns = [Pattern::repeat(Pattern::concatenate(
        lit('a'),
        Pattern::choose(lit('b'), lit('c')),
    ))];
    let valids = ["", "ab", "ac", "abac", "abacab"];
    let invalids = ["a", "b", "abc", "aba"];
    run_tests!(&patterns, &valids, &invalids);

    // (a|b)*abb
    let patterns = [Pattern::concatenate(
        Pattern::repeat(Pattern::choose(lit('a'), lit('b'))),
        seq("abb"),
    )];
    let valids = ["abb", "aabb", "babb", "aababb"];
    let invalids = ["", "ab", "aba", "bab"];
    run_tests!(&patterns, &valids, &invalids);

    // a|b*
    let patterns = [Pattern::choose(lit('a'), Pattern::repeat(lit('b')))];
    let valids = ["", "a", "b", "bb", "bbb"];
    let invalids = [" ", "aa", "ab", "ba", "aab", "aba"];
    run_tests!(&patterns, &valids, &invalids);

    // (a|bc)*
    let patterns = [Pattern::repeat(Pattern::choose(lit('a'), seq("bc")))];
    let valids = ["", "a", "bc", "abc", "bca", "aabc", "abcbc"];
    let invalids = [" ", "c", "b", "ab", "ac", "ba", "abcb", "abcc"];
    run_tests!(&patterns, &valids, &invalids);
}

#[test]
fn test_unknown_symbols() {
    let patterns = [Pattern::repeat(Pattern::choose(lit('a'), lit('b')))];
    let valids = ["", "abba"];
    let invalids = ["abxba", "\u{0}", "ä"];
    run_tests!(&patterns, &valids, &invalids);
}

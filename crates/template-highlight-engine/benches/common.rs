// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_template(size: usize) -> String {
    let base = "Hi. {AliasRepName} here. [I'd like to buy/I want to acquire] {PropertyAddress}. \
                To make it easy, I [can pay upfront/am willing to pay upfront] and \
                [we can close/we can be done/we can finish] [quickly/soon/whenever you want]. \
                (Any interest)?\n";
    base.repeat(size)
}

/// Text dominated by same-kind nesting and interleaved kinds.
#[allow(dead_code)]
pub fn generate_adversarial(size: usize) -> String {
    let base = "{{test}} [[test]] [te{s}t] {te[s]t} {te[s} te((te)[s]t) (te[st)]} {a[b}c] ";
    base.repeat(size)
}

/// Text with openers that never close.
#[allow(dead_code)]
pub fn generate_unclosed(size: usize) -> String {
    let mut s = "{ [ ( ".repeat(size);
    s.push_str("tail");
    s
}

/* outer /* inner */ still outer */
fn main() {
    let s = "/* not a comment */";
    let raw = r#"// "quoted" "#;
    let c = '"';
    let _ = longest::<'static>(s, raw, c); // lifetime is not a char
}

fn longest<'a>(a: &'a str, _b: &'a str, _c: char) -> &'a str {
    a
}

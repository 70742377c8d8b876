use rstest::rstest;
use serde_json::{json, Value};

fn parse(line: &str) -> Value {
    argline::parse(line).into_value()
}

#[rstest]
#[case("", json!({}))]
#[case("   ", json!({}))]
#[case("a", json!({"_": ["a"]}))]
#[case("a b", json!({"_": ["a", "b"]}))]
#[case("  a   b  c ", json!({"_": ["a", "b", "c"]}))]
#[case(r#"login ada "my password""#, json!({"_": ["login", "ada", "\"my password\""]}))]
fn positional_arguments(#[case] input: &str, #[case] expected: Value) {
    assert_eq!(parse(input), expected);
}

#[rstest]
#[case("-flag", json!({"flag": true}))]
#[case("--flag", json!({"flag": true}))]
#[case("-verbose -count:5", json!({"verbose": true, "count": 5}))]
#[case("--output:file.txt -debug", json!({"output": "file.txt", "debug": true}))]
#[case("a b c -f:3 --xyz", json!({"_": ["a", "b", "c"], "f": 3, "xyz": true}))]
fn named_flags(#[case] input: &str, #[case] expected: Value) {
    assert_eq!(parse(input), expected);
}

#[rstest]
#[case("-flag:1", json!({"flag": 1}))]
#[case("-flag:123", json!({"flag": 123}))]
#[case("-flag:on", json!({"flag": "on"}))]
#[case("-flag:true", json!({"flag": true}))]
#[case("-flag:false", json!({"flag": false}))]
#[case("-ratio:0.25", json!({"ratio": 0.25}))]
#[case(r#"-name:"Ada Lovelace""#, json!({"name": "Ada Lovelace"}))]
#[case("-count:5.0", json!({"count": 5}))]
#[case("-port:8e3", json!({"port": 8000}))]
#[case("-n 1e2", json!({"n": 100}))]
#[case("-x:-0", json!({"x": 0}))]
#[case("-list:[1.0,2.5]", json!({"list": [1, 2.5]}))]
fn colon_values(#[case] input: &str, #[case] expected: Value) {
    assert_eq!(parse(input), expected);
}

#[rstest]
#[case("-flag on", json!({"flag": "on"}))]
#[case(r#"-flag "always on""#, json!({"flag": "always on"}))]
#[case("-flag on off", json!({"flag": ["on", "off"]}))]
#[case("-ids 1 2 3", json!({"ids": [1, 2, 3]}))]
#[case("-mixed 1 two true", json!({"mixed": [1, "two", true]}))]
fn space_values(#[case] input: &str, #[case] expected: Value) {
    assert_eq!(parse(input), expected);
}

#[rstest]
#[case(r#"-flag:{"xyz":"123"}"#, json!({"flag": {"xyz": "123"}}))]
#[case(r#"-flag:{xyz:"123"}"#, json!({"flag": {"xyz": "123"}}))]
#[case("-flag:{xyz:'123'}", json!({"flag": {"xyz": "123"}}))]
#[case(r#"-flag:"{xyz:'123'}""#, json!({"flag": {"xyz": "123"}}))]
#[case("-flag:[1,2,3]", json!({"flag": [1, 2, 3]}))]
#[case(
    r#"-config:{"host":"localhost","port":8080} -debug"#,
    json!({"config": {"host": "localhost", "port": 8080}, "debug": true})
)]
#[case(
    r#"-config:{host:"localhost",port:8080} -debug"#,
    json!({"config": {"host": "localhost", "port": 8080}, "debug": true})
)]
#[case(
    "-config:{ host: 'localhost', tags: ['a', 'b'] }",
    json!({"config": {"host": "localhost", "tags": ["a", "b"]}})
)]
#[case("-flag {a:1} [2]", json!({"flag": [{"a": 1}, [2]]}))]
fn object_and_array_values(#[case] input: &str, #[case] expected: Value) {
    assert_eq!(parse(input), expected);
}

#[rstest]
#[case("-flag on -flag off", json!({"flag": ["on", "off"]}))]
#[case("-flag:1 -flag:2", json!({"flag": [1, 2]}))]
#[case("-flag:1 -flag 2 3", json!({"flag": [1, 2, 3]}))]
#[case("-flag -flag", json!({"flag": [true, true]}))]
#[case("-flag:[1,2] -flag:[3]", json!({"flag": [1, 2, 3]}))]
fn repeated_options_accumulate(#[case] input: &str, #[case] expected: Value) {
    assert_eq!(parse(input), expected);
}

#[rstest]
#[case("a b --- raw data here", json!({"_": ["a", "b"], "__": " raw data here"}))]
#[case("-flag:test --- some raw content", json!({"flag": "test", "__": " some raw content"}))]
#[case("--- just data", json!({"__": " just data"}))]
#[case("a ---   spaced -x:1  ", json!({"_": ["a"], "__": "   spaced -x:1  "}))]
#[case("a --- one --- two", json!({"_": ["a"], "__": " one --- two"}))]
fn trailing_data(#[case] input: &str, #[case] expected: Value) {
    assert_eq!(parse(input), expected);
}

#[test]
fn complex_combination() {
    assert_eq!(
        parse("pos1 pos2 -verbose -count:5 -files a.txt b.txt"),
        json!({
            "_": ["pos1", "pos2"],
            "verbose": true,
            "count": 5,
            "files": ["a.txt", "b.txt"]
        })
    );
}

#[test]
fn keys_keep_encounter_order() {
    let args = argline::parse("cmd -b:1 -a:2 --- tail");
    let keys: Vec<&String> = args.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["__", "b", "a", "_"]);
}

#[rstest]
#[case("-flag:{bad json", json!({"flag": "{bad json"}))]
#[case("-flag:{bad json}", json!({"flag": "{bad json}"}))]
#[case("-flag:[1,", json!({"flag": "[1,"}))]
#[case("-flag:}{", json!({"flag": "}{"}))]
#[case(r#"-flag:"unterminated"#, json!({"flag": "\"unterminated"}))]
#[case("-flag:null", json!({"flag": "null"}))]
fn malformed_values_degrade_to_text(#[case] input: &str, #[case] expected: Value) {
    assert_eq!(parse(input), expected);
}

#[rstest]
#[case("just some words here")]
#[case(r#"a "b c" {d e} [f g]"#)]
#[case("x")]
fn lines_without_options_are_positional(#[case] input: &str) {
    let args = argline::parse(input);
    let expected: Vec<String> = argline::tokenize(input);
    assert_eq!(args.positional().collect::<Vec<_>>(), expected);
    assert_eq!(args.len(), 1);
}

#[rstest]
#[case("123", json!(123))]
#[case("true", json!(true))]
#[case("-7", json!(-7))]
#[case("2.5", json!(2.5))]
fn scalar_values_reparse_identically(#[case] token: &str, #[case] expected: Value) {
    let first = argline::parse(&format!("-v:{token}"));
    let value = first.get("v").cloned().expect("value");
    assert_eq!(value, expected);

    let again = argline::parse(&format!("-v:{value}"));
    assert_eq!(again.get("v"), Some(&expected));
}

use std::collections::BTreeSet;

use super::*;

fn calls_in(line: &str) -> Vec<String> {
    let mut calls = BTreeSet::new();
    scan_calls(line, &mut calls);
    calls.into_iter().collect()
}

// ========================================================================
// Definition recognition
// ========================================================================

#[test]
fn test_function_bare_name() {
    let def = recognize("   function a  ").unwrap();
    assert_eq!(
        def,
        Definition::Function {
            name: "a".to_string(),
            inargs: vec![],
            outargs: vec![],
        }
    );
}

#[test]
fn test_function_empty_parens() {
    let def = recognize("function a()").unwrap();
    assert_eq!(
        def,
        Definition::Function {
            name: "a".to_string(),
            inargs: vec![],
            outargs: vec![],
        }
    );
}

#[test]
fn test_function_single_output() {
    let def = recognize("function a = asd(in1, in2)").unwrap();
    assert_eq!(
        def,
        Definition::Function {
            name: "asd".to_string(),
            inargs: vec!["in1".to_string(), "in2".to_string()],
            outargs: vec!["a".to_string()],
        }
    );
}

#[test]
fn test_function_output_vector() {
    let def = recognize("function [a, b] = f()").unwrap();
    assert_eq!(
        def,
        Definition::Function {
            name: "f".to_string(),
            inargs: vec![],
            outargs: vec!["a".to_string(), "b".to_string()],
        }
    );
}

#[test]
fn test_function_tight_spacing() {
    let def = recognize("function y=f(x)").unwrap();
    assert_eq!(
        def,
        Definition::Function {
            name: "f".to_string(),
            inargs: vec!["x".to_string()],
            outargs: vec!["y".to_string()],
        }
    );
}

#[test]
fn test_function_with_eol_comment() {
    let def = recognize("function f(x) % entry point").unwrap();
    assert!(matches!(def, Definition::Function { .. }));
}

#[test]
fn test_classdef_plain() {
    let def = recognize("   classdef A  ").unwrap();
    assert_eq!(
        def,
        Definition::Class {
            name: "A".to_string(),
            superclasses: vec![],
        }
    );
}

#[test]
fn test_classdef_single_superclass() {
    let def = recognize("classdef A < R").unwrap();
    assert_eq!(
        def,
        Definition::Class {
            name: "A".to_string(),
            superclasses: vec!["R".to_string()],
        }
    );
}

#[test]
fn test_classdef_multiple_superclasses() {
    let def = recognize("classdef A < S1 &   S2").unwrap();
    assert_eq!(
        def,
        Definition::Class {
            name: "A".to_string(),
            superclasses: vec!["S1".to_string(), "S2".to_string()],
        }
    );
}

#[test]
fn test_ordinary_code_is_not_a_definition() {
    assert!(recognize("x = foo(1);").is_none());
    assert!(recognize("last line funccall(3)asddaa").is_none());
    assert!(recognize("").is_none());
}

#[test]
fn test_keyword_prefix_is_not_a_definition() {
    // Identifiers merely starting with the keyword do not count.
    assert!(recognize("functions = 3;").is_none());
    assert!(recognize("classdefs{1} = 'a';").is_none());
}

#[test]
fn test_malformed_signatures_fall_through() {
    // Unbalanced parentheses or stray trailing tokens reclassify the
    // line as ordinary code.
    assert!(recognize("function f(a,").is_none());
    assert!(recognize("function [a, b = f()").is_none());
    assert!(recognize("function a b").is_none());
    assert!(recognize("classdef").is_none());
    assert!(recognize("classdef A < S1 &").is_none());
}

// ========================================================================
// Call scanning
// ========================================================================

#[test]
fn test_call_simple() {
    assert_eq!(calls_in("funcname1  ("), vec!["funcname1"]);
}

#[test]
fn test_calls_in_code_line() {
    assert_eq!(calls_in("asd aasd funcname1  ( func2() )"), vec!["func2", "funcname1"]);
}

#[test]
fn test_nested_calls() {
    assert_eq!(calls_in("funccall(a, fcall2(a, b))"), vec!["fcall2", "funccall"]);
}

#[test]
fn test_namespace_prefix_discarded() {
    assert_eq!(calls_in("pkg.sub.run(x)"), vec!["run"]);
}

#[test]
fn test_eol_comment_is_not_a_call_source() {
    assert_eq!(calls_in("y = 1; % foo(x)"), Vec::<String>::new());
}

#[test]
fn test_duplicate_calls_deduplicated() {
    assert_eq!(calls_in("foo(foo(1), foo(2))"), vec!["foo"]);
}

#[test]
fn test_scan_is_idempotent() {
    let mut calls = BTreeSet::new();
    scan_calls("foo(bar(1))", &mut calls);
    let first = calls.clone();
    scan_calls("foo(bar(1))", &mut calls);
    assert_eq!(calls, first);
}

#[test]
fn test_no_parenthesis_no_call() {
    assert_eq!(calls_in("x = foo + bar;"), Vec::<String>::new());
}

// ========================================================================
// Section scanning
// ========================================================================

#[test]
fn test_empty_file_yields_preamble_only() {
    let sections = scan_sections("");
    assert_eq!(sections.len(), 1);
    assert!(sections[0].definition.is_none());
    assert_eq!(sections[0].source_line, 1);
}

#[test]
fn test_leading_comment_lands_in_preamble() {
    let sections = scan_sections("% top\nx = 1;\n");
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].doc, " top\n");
}

#[test]
fn test_commentblock_strips_marker_per_line() {
    let sections = scan_sections("% line nr.1 \n  % line2 test % comment in comment\n%3rd\n");
    assert_eq!(
        sections[0].doc,
        " line nr.1 \n line2 test % comment in comment\n3rd\n"
    );
}

#[test]
fn test_docstring_follows_definition() {
    let sections = scan_sections("function f()\n% doc\nfoo(1)\n");
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[1].doc, " doc\n");
    assert_eq!(
        sections[1].calls.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["foo"]
    );
}

#[test]
fn test_blank_lines_before_docstring_are_skipped() {
    // The docstring block may be separated from its definition line by
    // blank lines; capture stays open until real text appears.
    let sections = scan_sections("function f()\n\n% doc\n");
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[1].doc, " doc\n");
}

#[test]
fn test_blank_line_terminates_commentblock() {
    let sections = scan_sections("function f()\n% doc\n\n% not doc\nx()\n");
    assert_eq!(sections[1].doc, " doc\n");
    assert_eq!(sections[1].calls.iter().map(String::as_str).collect::<Vec<_>>(), vec!["x"]);
}

#[test]
fn test_definition_line_is_not_a_call_source() {
    // The defining signature never records the function as its own call.
    let sections = scan_sections("function a = f(x)\n");
    assert!(sections[1].calls.is_empty());
}

#[test]
fn test_each_definition_opens_a_section() {
    let source = "function one()\nfoo();\nfunction two()\nbar();\n";
    let sections = scan_sections(source);
    assert_eq!(sections.len(), 3);
    assert_eq!(sections[1].source_line, 1);
    assert_eq!(sections[2].source_line, 3);
    assert_eq!(sections[1].calls.iter().map(String::as_str).collect::<Vec<_>>(), vec!["foo"]);
    assert_eq!(sections[2].calls.iter().map(String::as_str).collect::<Vec<_>>(), vec!["bar"]);
}

#[test]
fn test_definition_split_over_continuation() {
    let sections = scan_sections("function out = f(a, ...\n  b)\ng();\n");
    assert_eq!(
        sections[1].definition,
        Some(Definition::Function {
            name: "f".to_string(),
            inargs: vec!["a".to_string(), "b".to_string()],
            outargs: vec!["out".to_string()],
        })
    );
    assert_eq!(sections[1].source_line, 1);
}

#[test]
fn test_mid_code_comments_are_ignored() {
    let sections = scan_sections("x = 1;\n% stray note\ny = foo(x);\n");
    assert_eq!(sections.len(), 1);
    assert!(sections[0].doc.is_empty());
    assert_eq!(sections[0].calls.iter().map(String::as_str).collect::<Vec<_>>(), vec!["foo"]);
}

#[cfg(test)]
mod verify {
    use limn::formatting::{Canonical, Format};

    #[test]
    fn formatting_is_idempotent() {
        let content = "int main()   {\n\tint x = 1;\n\n\n\n  if (x) {\nreturn x;\n}\nreturn 0;\n}\n";

        let once = Canonical
            .format(content, "default")
            .unwrap();
        let twice = Canonical
            .format(&once, "default")
            .unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn nested_blocks_reindented() {
        let content = "int main() {\nif (x) {\ny();\n}\n}\n";

        let result = Canonical
            .format(content, "default")
            .unwrap();
        assert_eq!(
            result,
            "int main() {\n    if (x) {\n        y();\n    }\n}\n"
        );
    }

    #[test]
    fn unparsable_input_rejected() {
        let result = Canonical.format("int main() {\nreturn 0;\n}\n}\n", "default");

        assert!(result.is_err());
        let error = result.unwrap_err();
        assert_eq!(error.problem, "unbalanced braces");
    }

    #[test]
    fn style_presets_differ() {
        let content = "void f() {\ng();\n}\n";

        let wide = Canonical
            .format(content, "default")
            .unwrap();
        let narrow = Canonical
            .format(content, "compact")
            .unwrap();

        assert!(wide.contains("    g();"));
        assert!(narrow.contains("  g();"));
    }
}

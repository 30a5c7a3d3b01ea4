    use super::*;

    #[test]
    fn whitespace_input_is_not_an_error() {
        assert!(parse_manifest("", Profile::Tuxedo).unwrap().is_none());
        assert!(parse_manifest("  \n\t", Profile::Tuxedo).unwrap().is_none());
    }

    #[test]
    fn invalid_json_reports_parser_message() {
        let err = parse_manifest("{ bad", Profile::Tuxedo).unwrap_err();
        match err {
            EditorError::Parse { message } => assert!(!message.is_empty()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_fields_take_defaults() {
        let m = parse_manifest(r#"{"title":"Shop"}"#, Profile::Tuxedo)
            .unwrap()
            .unwrap();
        assert_eq!(m.title, "Shop");
        assert_eq!(m.description, "");
        assert_eq!(m.template, "nextjs-developer");
        assert!(m.additional_dependencies.is_empty());
        assert!(!m.has_additional_dependencies);
    }

    #[test]
    fn fixed_fields_ignore_input_in_constrained_profiles() {
        let raw = r#"{"template":"vue","port":8080,"file_path":"src/App.vue"}"#;
        let m = parse_manifest(raw, Profile::Tuxedo).unwrap().unwrap();
        assert_eq!(m.template, "nextjs-developer");
        assert_eq!(m.port, Port::Text("3000".into()));
        assert_eq!(m.file_path, "app/page.tsx");

        let m = parse_manifest(raw, Profile::General).unwrap().unwrap();
        assert_eq!(m.template, "vue");
        assert_eq!(m.port, Port::Number(8080));
        assert_eq!(m.file_path, "src/App.vue");
    }

    #[test]
    fn code_escapes_are_decoded() {
        let raw = r#"{"code":"line1\\nline2"}"#;
        let m = parse_manifest(raw, Profile::Portfolio).unwrap().unwrap();
        assert_eq!(m.code, "line1\nline2");
    }

    #[test]
    fn unknown_keys_are_dropped_and_odd_shapes_do_not_crash() {
        let m = parse_manifest(r#"{"extra":1,"title":42}"#, Profile::Tuxedo)
            .unwrap()
            .unwrap();
        assert_eq!(m, Profile::Tuxedo.default_manifest());

        for raw in ["[1,2,3]", "\"just a string\"", "null", "17"] {
            let m = parse_manifest(raw, Profile::General).unwrap().unwrap();
            assert_eq!(m, Profile::General.default_manifest());
        }
    }

    #[test]
    fn dependency_flag_follows_truthiness() {
        let m = parse_manifest(
            r#"{"has_additional_dependencies":"yes","additional_dependencies":["zod",3,"clsx"]}"#,
            Profile::Tuxedo,
        )
        .unwrap()
        .unwrap();
        assert!(m.has_additional_dependencies);
        assert_eq!(m.additional_dependencies, vec!["zod", "clsx"]);

        let m = parse_manifest(r#"{"has_additional_dependencies":0}"#, Profile::Tuxedo)
            .unwrap()
            .unwrap();
        assert!(!m.has_additional_dependencies);
    }

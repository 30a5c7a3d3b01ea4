    use super::*;
    use crate::error::ClipboardError;
    use crate::model::Port;
    use crate::profile::Profile;

    #[derive(Default)]
    struct FakeClipboard {
        text: Option<String>,
    }

    impl Clipboard for FakeClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.text = Some(text.to_string());
            Ok(())
        }

        fn get_text(&mut self) -> Result<String, ClipboardError> {
            self.text
                .clone()
                .ok_or_else(|| ClipboardError::Failed("empty".to_string()))
        }
    }

    fn app(profile: Profile) -> App {
        App::for_test(profile, Box::new(FakeClipboard::default()))
    }

    fn press(app: &mut App, code: KeyCode) {
        key_dispatch::handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        key_dispatch::handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_reparses_on_every_keystroke() {
        let mut app = app(Profile::Tuxedo);
        type_text(&mut app, "{\"title\":\"Shop\"");
        assert!(app.session.parse_error().is_some());
        assert!(app.session.parsed().is_none());

        type_text(&mut app, "}");
        assert!(app.session.parse_error().is_none());
        assert_eq!(app.session.manifest().title, "Shop");

        ctrl(&mut app, 'e');
        assert_eq!(app.session.tab(), Tab::Edit);
        assert_eq!(app.field_input.buf, "Shop");
    }

    #[test]
    fn editor_stays_locked_without_a_document() {
        let mut app = app(Profile::Tuxedo);
        ctrl(&mut app, 'e');
        assert_eq!(app.session.tab(), Tab::Input);
        assert!(app.last_result.as_ref().is_some_and(|r| r.kind == EntryKind::Error));

        press(&mut app, KeyCode::F(3));
        assert_eq!(app.session.tab(), Tab::Input);
    }

    #[test]
    fn new_document_is_edited_through_the_form() {
        let mut app = app(Profile::Tuxedo);
        ctrl(&mut app, 'n');
        assert_eq!(app.session.tab(), Tab::Edit);
        assert_eq!(app.focus, FormRow::Field(Field::Title));

        type_text(&mut app, "Landing");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.manifest().title, "Landin");

        // Template is fixed for this profile.
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, FormRow::Field(Field::Template));
        type_text(&mut app, "zz");
        assert_eq!(app.session.manifest().template, "nextjs-developer");
    }

    #[test]
    fn dependency_rows_appear_and_vanish_with_the_flag() {
        let mut app = app(Profile::Tuxedo);
        ctrl(&mut app, 'n');
        app.focus = FormRow::Field(Field::HasAdditionalDependencies);

        ctrl(&mut app, 'a');
        assert!(app.session.manifest().additional_dependencies.is_empty());

        press(&mut app, KeyCode::Char(' '));
        assert!(app.session.manifest().has_additional_dependencies);

        ctrl(&mut app, 'a');
        assert_eq!(app.focus, FormRow::Dependency(0));
        type_text(&mut app, "zod");
        assert_eq!(
            app.session.manifest().install_dependencies_command,
            "npm install zod"
        );

        app.focus = FormRow::Field(Field::HasAdditionalDependencies);
        press(&mut app, KeyCode::Enter);
        let m = app.session.manifest();
        assert!(!m.has_additional_dependencies);
        assert!(m.additional_dependencies.is_empty());
        assert_eq!(m.install_dependencies_command, "");
        assert_eq!(app.focus, FormRow::Field(Field::HasAdditionalDependencies));
        assert!(!form_rows(m).contains(&FormRow::AddDependency));
    }

    #[test]
    fn removing_the_focused_dependency_moves_focus_back() {
        let mut app = app(Profile::Tuxedo);
        type_text(
            &mut app,
            r#"{"has_additional_dependencies":true,"additional_dependencies":["a","b"]}"#,
        );
        ctrl(&mut app, 'e');
        app.focus = FormRow::Dependency(1);
        app.load_focus();

        ctrl(&mut app, 'd');
        assert_eq!(app.session.manifest().additional_dependencies, vec!["a"]);
        assert_eq!(app.focus, FormRow::Dependency(0));
        assert_eq!(app.field_input.buf, "a");
    }

    #[test]
    fn typed_port_shows_the_stored_value() {
        let mut app = app(Profile::General);
        ctrl(&mut app, 'n');
        app.focus = FormRow::Field(Field::Port);
        app.load_focus();
        app.field_input.clear();
        app.commit_field_input();

        type_text(&mut app, "80x");
        assert_eq!(app.session.manifest().port, Port::Number(80));
        assert_eq!(app.field_input.buf, "80");
    }

    #[test]
    fn generate_moves_to_output_and_copies() {
        let mut app = app(Profile::Tuxedo);
        ctrl(&mut app, 'n');
        type_text(&mut app, "Shop");
        ctrl(&mut app, 'g');
        assert_eq!(app.session.tab(), Tab::Output);
        let out = app.session.output().unwrap_or_default().to_string();
        assert!(out.contains("\"title\": \"Shop\""));

        press(&mut app, KeyCode::Char('c'));
        let n = app.session.notification(Instant::now()).cloned();
        assert!(n.is_some_and(|n| n.kind == NotificationKind::Success));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.session.tab(), Tab::Edit);
    }

    #[test]
    fn bracketed_paste_targets_the_active_editor() {
        let mut app = app(Profile::Tuxedo);
        app.paste_text(r#"{"title":"Pasted"}"#);
        assert_eq!(app.session.manifest().title, "Pasted");

        ctrl(&mut app, 'e');
        app.paste_text("one\ntwo");
        assert_eq!(app.session.manifest().title, "Pastedone");

        app.focus = FormRow::Field(Field::Code);
        app.load_focus();
        app.paste_text("x\ny");
        assert_eq!(app.session.manifest().code, "x\ny");
    }

    #[test]
    fn clipboard_paste_fills_the_input_editor() {
        let clip = FakeClipboard {
            text: Some(r#"{"title":"Clip"}"#.to_string()),
        };
        let mut app = App::for_test(Profile::Tuxedo, Box::new(clip));
        ctrl(&mut app, 'v');
        assert_eq!(app.input.buf, r#"{"title":"Clip"}"#);
        assert_eq!(app.session.manifest().title, "Clip");
    }

    #[test]
    fn activity_log_keeps_only_recent_entries() {
        let mut app = app(Profile::Tuxedo);
        let total = log_types::LOG_LIMIT + 25;
        for i in 0..total {
            app.push_output(vec![format!("entry {}", i)]);
        }
        assert_eq!(app.log.len(), log_types::LOG_LIMIT);
        assert_eq!(app.logged, total as u64);
        assert_eq!(app.log.front().map(|e| e.lines[0].as_str()), Some("entry 25"));
        assert_eq!(
            app.last_result.as_ref().map(|e| e.lines[0].clone()),
            Some(format!("entry {}", total - 1))
        );
    }

    use super::*;
    use crate::error::ClipboardError;
    use crate::model::Port;

    #[derive(Default)]
    struct FakeClipboard {
        text: Option<String>,
        fail_with: Option<ClipboardError>,
    }

    impl Clipboard for FakeClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if let Some(err) = self.fail_with.clone() {
                return Err(err);
            }
            self.text = Some(text.to_string());
            Ok(())
        }

        fn get_text(&mut self) -> Result<String, ClipboardError> {
            if let Some(err) = self.fail_with.clone() {
                return Err(err);
            }
            self.text
                .clone()
                .ok_or_else(|| ClipboardError::Failed("empty".to_string()))
        }
    }

    const DOC: &str = r#"{"title":"Shop","code":"a\\nb","has_additional_dependencies":true,"additional_dependencies":["react"],"install_dependencies_command":"npm install react"}"#;

    #[test]
    fn tabs_unlock_as_the_pipeline_advances() {
        let mut s = Session::new(Profile::Tuxedo);
        assert!(!s.open_tab(Tab::Edit));
        assert!(!s.open_tab(Tab::Output));

        s.input_changed(DOC);
        assert!(s.open_tab(Tab::Edit));
        assert!(!s.open_tab(Tab::Output));

        s.generate().unwrap();
        assert_eq!(s.tab(), Tab::Output);
        assert!(s.open_tab(Tab::Input));
        assert!(s.open_tab(Tab::Output));
    }

    #[test]
    fn bad_input_keeps_text_and_previous_manifest() {
        let mut s = Session::new(Profile::Tuxedo);
        s.input_changed(DOC);
        let good = s.manifest().clone();

        s.input_changed("{ bad");
        assert!(s.parsed().is_none());
        assert!(s.parse_error().is_some_and(|e| !e.is_empty()));
        assert_eq!(s.raw_input(), "{ bad");
        assert_eq!(s.manifest(), &good);
    }

    #[test]
    fn empty_input_unloads_without_error() {
        let mut s = Session::new(Profile::Tuxedo);
        s.input_changed("{ bad");
        s.input_changed("   ");
        assert!(s.parse_error().is_none());
        assert!(s.parsed().is_none());
        assert!(!s.can_edit());
    }

    #[test]
    fn successful_parse_captures_original_code_and_leaves_new_mode() {
        let mut s = Session::new(Profile::Portfolio);
        s.start_new();
        assert!(s.is_creating_new());
        assert_eq!(s.tab(), Tab::Edit);
        assert_eq!(s.manifest().code, "");

        s.input_changed(DOC);
        assert!(!s.is_creating_new());
        assert_eq!(s.original_code(), "a\nb");
        assert!(!s.code_is_modified());

        s.apply(FieldUpdate::Code("a\nc\nd".into()));
        assert!(s.code_is_modified());
        assert_eq!(s.code_changed_lines(), vec![1, 2]);
    }

    #[test]
    fn deleted_trailing_lines_count_as_changed() {
        let mut s = Session::new(Profile::Portfolio);
        s.input_changed(r#"{"code":"a\\nb\\nc"}"#);
        assert_eq!(s.original_code(), "a\nb\nc");

        s.apply(FieldUpdate::Code("a\nb".into()));
        assert!(s.code_is_modified());
        assert_eq!(s.code_changed_lines(), vec![2]);

        s.apply(FieldUpdate::Code("a".into()));
        assert_eq!(s.code_changed_lines(), vec![1, 2]);
    }

    #[test]
    fn generate_roundtrips_through_input() {
        let mut s = Session::new(Profile::Tuxedo);
        s.input_changed(DOC);
        let out = s.generate().unwrap().to_string();

        let mut again = Session::new(Profile::Tuxedo);
        again.input_changed(out);
        assert_eq!(again.manifest(), s.manifest());
        assert_eq!(again.manifest().port, Port::Text("3000".into()));
    }

    #[test]
    fn dependency_operations_flow_through_session() {
        let mut s = Session::new(Profile::General);
        s.start_new();
        s.apply(FieldUpdate::HasAdditionalDependencies(true));
        s.add_dependency();
        s.set_dependency(0, "zod");
        assert_eq!(s.manifest().install_dependencies_command, "npm install zod");
        s.remove_dependency(0);
        assert_eq!(s.manifest().install_dependencies_command, "");
        assert!(s.manifest().has_additional_dependencies);
    }

    #[test]
    fn clipboard_actions_notify() {
        let now = Instant::now();
        let mut clip = FakeClipboard::default();
        let mut s = Session::new(Profile::Portfolio);

        s.copy_output(&mut clip, now);
        assert_eq!(s.notification(now).unwrap().kind, NotificationKind::Error);

        s.input_changed(DOC);
        s.generate().unwrap();
        s.copy_output(&mut clip, now);
        assert_eq!(s.notification(now).unwrap().message, "JSON copied to clipboard!");
        assert_eq!(clip.text.as_deref(), s.output());

        s.copy_output_code(&mut clip, now);
        assert_eq!(clip.text.as_deref(), Some("a\nb"));

        clip.text = Some("pasted\ncode".into());
        s.paste_code(&mut clip, now);
        assert_eq!(s.manifest().code, "pasted\ncode");
    }

    #[test]
    fn clipboard_failures_are_downgraded_to_notifications() {
        let now = Instant::now();
        let mut s = Session::new(Profile::Portfolio);
        s.start_new();

        let mut denied = FakeClipboard {
            fail_with: Some(ClipboardError::PermissionDenied),
            ..Default::default()
        };
        s.paste_code(&mut denied, now);
        let n = s.notification(now).unwrap();
        assert_eq!(n.kind, NotificationKind::Error);
        assert!(n.message.contains("permission denied"));

        let mut broken = FakeClipboard {
            fail_with: Some(ClipboardError::Failed("busy".into())),
            ..Default::default()
        };
        s.copy_code(&mut broken, now);
        assert_eq!(s.notification(now).unwrap().message, "Failed to copy to clipboard");
        assert_eq!(s.manifest().code, "");
    }

    #[test]
    fn paste_into_code_is_limited_to_portfolio() {
        let now = Instant::now();
        let mut clip = FakeClipboard {
            text: Some("x".into()),
            ..Default::default()
        };
        let mut s = Session::new(Profile::Tuxedo);
        s.start_new();
        s.paste_code(&mut clip, now);
        assert_eq!(s.manifest().code, "");
        assert_eq!(s.notification(now).unwrap().kind, NotificationKind::Error);
    }

    #[test]
    fn paste_input_parses_clipboard_text() {
        let now = Instant::now();
        let mut clip = FakeClipboard {
            text: Some(DOC.to_string()),
            ..Default::default()
        };
        let mut s = Session::new(Profile::Tuxedo);
        s.paste_input(&mut clip, now);
        assert_eq!(s.manifest().title, "Shop");
        assert!(s.can_edit());
    }

    #[test]
    fn notifications_expire() {
        let now = Instant::now();
        let mut s = Session::new(Profile::Tuxedo).with_notification_ttl(Duration::from_millis(10));
        s.notify("hi", NotificationKind::Success, now);
        assert!(!s.expire_notification(now));
        let later = now + Duration::from_millis(10);
        assert!(s.notification(later).is_none());
        assert!(s.expire_notification(later));
    }

    #[test]
    fn download_requires_output() {
        let tmp = tempfile::tempdir().unwrap();
        let now = Instant::now();
        let mut s = Session::new(Profile::Tuxedo);
        assert!(s.download(tmp.path(), now).is_none());

        s.start_new();
        s.generate().unwrap();
        let path = s.download(tmp.path(), now).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), s.output().unwrap());
    }

use pretty_assertions::assert_eq;
use todocheck::rules::{BadTagRule, MissedAuthorRule};
use todocheck::{Checker, Error, Finding, Rule, RuleRegistry, TagMatcher};

fn findings(source: &str) -> Vec<Finding> {
    let registry = RuleRegistry::default();
    let checker = Checker::from_source(&registry, source).unwrap();
    checker.get_errors()
}

fn findings_for(code: u32, source: &str) -> Vec<Finding> {
    findings(source)
        .into_iter()
        .filter(|f| f.code == code)
        .collect()
}

#[test]
fn test_rule_table() {
    let cases: &[(u32, bool, &str)] = &[
        (1, true, "1 # TODO: i am ok"),
        (1, false, "1 # FIXME: inline"),
        (1, false, "# BUG: block"),
        (1, false, "1 # BUG: inline again"),
        (2, true, "1 # TODO(author): i am ok"),
        (2, true, "1 # TODO: no author before the colon"),
        (2, false, "1 # TODO(   ): empty brackets"),
        (2, false, "1 # TODO[name]: wrong brackets"),
        (4, true, "1 # TODO(author): i am ok"),
        (4, true, "1 # TODO: i am also ok"),
        (4, false, "1 # TODO(author) missed colon"),
        (4, false, "1 # TODO missed author and colon"),
        (4, false, "1 # TODO(author) not the right place :)"),
        (5, true, "1 # TODO(author): i am ok"),
        (5, true, "1 # TODO: i am ok"),
        (5, true, "1 # TODO: taht is also ok:"),
        (5, true, "1 # TODO(author): that is ok too:"),
        (5, false, "1 # TODO(author):"),
        (5, false, "1 # TODO:"),
        (5, false, "1 # TODO(author):    "),
        (5, false, "1 # TODO:     "),
        (6, true, "1 # TODO: ok"),
        (6, true, "1 # FIXME: ok"),
        (6, true, "1 # BUG: ok"),
        (6, false, "1 # ToDo: bad"),
        (6, false, "1 # todo: bad"),
        (6, false, "1 # FixMe: bad"),
        (6, false, "1 # Bug: bad"),
        (7, true, "1 # TODO: ok"),
        (7, false, "1 # TODO:tight"),
        (3, true, "1 # TODO(author): url http://github.com/a/b/issues/1/"),
        (3, true, "1 # TODO(author): url https://github.com/a/b/issues/1/"),
        (3, true, "1 # TODO(author): code EIQ-911"),
        (3, true, "1 # TODO: no author EIQ-911"),
        (3, true, "1 # TODO no colon EIQ-911"),
        (3, false, "1 # TODO(author): no code or link"),
        (3, false, "1 # TODO(author): lowercase lol-911"),
    ];

    for (code, ok, text) in cases {
        let errors = findings_for(*code, &format!("{}\n", text));
        if *ok {
            assert!(errors.is_empty(), "T00{} should pass: {}", code, text);
        } else {
            assert_eq!(errors.len(), 1, "T00{} should fail once: {}", code, text);
            assert_eq!(errors[0].row, 1);
        }
    }
}

#[test]
fn test_missed_link_multiline() {
    let source = "\
# TODO: multiline
# link goes here http://github.com/a/b/issues/1/
# TODO: new todo
c = 15
";
    let rows: Vec<usize> = findings_for(3, source).iter().map(|f| f.row).collect();
    assert_eq!(rows, vec![3]);
}

#[test]
fn test_well_formed_annotation_passes_every_rule() {
    let source = "\
def f():
    return 1  # TODO(gram): cache this result
    # tracked in https://github.com/a/b/issues/7
";
    assert_eq!(findings(source), Vec::new());
}

#[test]
fn test_messages() {
    let messages: Vec<String> = findings("x = 2  # ToDo:bad\n")
        .iter()
        .map(|f| f.message())
        .collect();

    assert_eq!(
        messages,
        vec![
            "T003: add link on issue into TODO".to_string(),
            "T006: write TODO instead of ToDo".to_string(),
            "T007: missed space after colon in TODO".to_string(),
        ]
    );
}

#[test]
fn test_findings_positioned_at_comment() {
    let errors = findings("value = compute()   # FIXME(me): x #1\n");
    assert_eq!(errors.len(), 1);
    assert_eq!((errors[0].row, errors[0].col), (1, 21));
}

#[test]
fn test_identical_runs() {
    let source = "# XXX\nx = 1\n# todo(me):y\n";
    assert_eq!(findings(source), findings(source));
}

#[test]
fn test_duplicate_registration_registers_nothing() {
    let result = RuleRegistry::new(
        TagMatcher::default(),
        vec![Box::new(BadTagRule), Box::new(MissedAuthorRule), Box::new(BadTagRule)],
    );
    assert!(matches!(result, Err(Error::DuplicateRuleCode(1))));
}

#[test]
fn test_custom_rule_alongside_builtins() {
    struct NoXxx;

    impl Rule for NoXxx {
        fn code(&self) -> u32 {
            8
        }

        fn name(&self) -> &'static str {
            "no-xxx"
        }

        fn text(&self) -> &'static str {
            "XXX is banned"
        }

        fn check_comment(&self, comment: &todocheck::Token, _tags: &TagMatcher) -> Option<String> {
            comment.text().contains("XXX").then(|| self.text().to_string())
        }
    }

    let mut registry = RuleRegistry::default();
    registry.register(Box::new(NoXxx)).unwrap();
    let checker = Checker::from_source(&registry, "# XXX(me): x #2\n").unwrap();
    let codes: Vec<u32> = checker.get_errors().iter().map(|f| f.code).collect();

    assert_eq!(codes, vec![1, 8]);
}

use study_cuddie::utils::logger::init_logging;

#[test]
fn logging_initializes_once_and_tolerates_repeat_calls() {
    let dir = tempfile::tempdir().expect("temp dir");
    let log_dir = dir.path().join("logs");

    init_logging(Some(&log_dir)).expect("first init succeeds");
    assert!(log_dir.is_dir());

    // Later calls hit the OnceCell and are no-ops.
    init_logging(Some(&log_dir)).expect("second init is a no-op");
    init_logging(None).expect("console-only init is a no-op too");
}

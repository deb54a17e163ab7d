use dropzone_core::{
    Command, Constraints, DeleteRequest, DropzoneConfig, ErrorKind, FileError, FileInfo,
    InputKind, PickerMirror, Rejection, Session, UploadListener,
};

const KB: u64 = 1024;
const MB: u64 = 1024 * KB;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Upload(Vec<String>, Vec<String>),
    Rejected(Vec<String>),
    Accepted(Vec<String>),
    Drop(Vec<String>),
    Change(Vec<String>),
}

#[derive(Debug, Default)]
struct Recorder {
    calls: Vec<Call>,
    last_rejections: Vec<Rejection>,
}

fn names(files: &[FileInfo]) -> Vec<String> {
    files.iter().map(|f| f.name().to_string()).collect()
}

fn rejected_names(rejections: &[Rejection]) -> Vec<String> {
    rejections.iter().map(|r| r.file.name().to_string()).collect()
}

impl UploadListener for Recorder {
    fn on_upload(&mut self, accepted: &[FileInfo], rejections: &[Rejection]) {
        self.last_rejections = rejections.to_vec();
        self.calls
            .push(Call::Upload(names(accepted), rejected_names(rejections)));
    }

    fn on_upload_accepted(&mut self, accepted: &[FileInfo]) {
        self.calls.push(Call::Accepted(names(accepted)));
    }

    fn on_upload_rejected(&mut self, rejections: &[Rejection]) {
        self.calls.push(Call::Rejected(rejected_names(rejections)));
    }

    fn on_drop(&mut self, accepted: &[FileInfo]) {
        self.calls.push(Call::Drop(names(accepted)));
    }

    fn on_change(&mut self, accepted: &[FileInfo]) {
        self.calls.push(Call::Change(names(accepted)));
    }
}

impl Recorder {
    fn uploads(&self) -> Vec<(Vec<String>, Vec<String>)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Upload(a, r) => Some((a.clone(), r.clone())),
                _ => None,
            })
            .collect()
    }
}

fn session(constraints: Constraints) -> Session<Recorder> {
    Session::new(
        DropzoneConfig::default().with_constraints(constraints),
        Recorder::default(),
    )
}

fn file(name: &str, size: u64, mime: &str) -> FileInfo {
    FileInfo::new(name, size, mime)
}

fn strs(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

// --- End-to-end validation ---

#[test]
fn no_constraints_accepts_everything() {
    let mut s = session(Constraints::new());
    s.handle_input(InputKind::Change, vec![file("a.txt", KB, "text/plain")]);

    assert_eq!(s.listener().uploads(), vec![(strs(&["a.txt"]), vec![])]);
}

#[test]
fn too_large_file_is_rejected_and_pruned_from_picker() {
    let mut s = session(Constraints::new().with_max_size(MB));
    s.handle_input(
        InputKind::Drop,
        vec![
            file("a.bin", 500 * KB, ""),
            file("b.bin", 2 * MB, ""),
        ],
    );

    let recorder = s.listener();
    assert_eq!(recorder.uploads(), vec![(strs(&["a.bin"]), strs(&["b.bin"]))]);
    assert_eq!(recorder.last_rejections[0].kinds(), vec![ErrorKind::FileTooLarge]);
    assert_eq!(s.picker().files(), &[file("a.bin", 500 * KB, "")]);
    assert_eq!(s.files().len(), 2);
}

#[test]
fn wrong_type_is_rejected() {
    let mut s = session(Constraints::new().with_accepted_formats(["image/png"]));
    s.handle_input(InputKind::Change, vec![file("file.txt", 10, "text/plain")]);

    let recorder = s.listener();
    assert_eq!(recorder.uploads(), vec![(vec![], strs(&["file.txt"]))]);
    assert_eq!(
        recorder.last_rejections[0].kinds(),
        vec![ErrorKind::FileInvalidType]
    );
    assert!(s.picker().files().is_empty());
}

#[test]
fn too_many_files_rejects_whole_batch() {
    let mut s = session(Constraints::new().with_max_files(2));
    s.handle_input(
        InputKind::Drop,
        vec![file("a", 1, ""), file("b", 1, ""), file("c", 1, "")],
    );

    let recorder = s.listener();
    assert_eq!(recorder.uploads(), vec![(vec![], strs(&["a", "b", "c"]))]);
    assert!(recorder
        .last_rejections
        .iter()
        .all(|r| r.kinds() == vec![ErrorKind::TooManyFiles]));
    assert!(s.picker().files().is_empty());
}

// --- Notification contract ---

#[test]
fn callbacks_fire_together_in_order() {
    let mut s = session(Constraints::new().with_max_size(5));
    s.handle_input(
        InputKind::Drop,
        vec![file("ok", 1, ""), file("big", 10, "")],
    );

    assert_eq!(
        s.listener().calls,
        vec![
            Call::Drop(strs(&["ok"])),
            Call::Upload(strs(&["ok"]), strs(&["big"])),
            Call::Rejected(strs(&["big"])),
            Call::Accepted(strs(&["ok"])),
        ]
    );
}

#[test]
fn auto_remove_does_not_notify_twice() {
    let mut s = session(Constraints::new().with_min_size(5));
    s.handle_input(
        InputKind::Change,
        vec![file("tiny", 1, ""), file("fine", 10, "")],
    );

    assert_eq!(s.listener().uploads().len(), 1);
    assert_eq!(s.pending_deferred(), 0);
}

#[test]
fn equal_total_suppresses_notification() {
    // Same count, different files: the short-circuit hides the change.
    let mut s = session(Constraints::new());
    s.handle_input(InputKind::Change, vec![file("a", 1, "")]);
    s.handle_input(InputKind::Change, vec![file("b", 1, "")]);

    assert_eq!(s.listener().uploads(), vec![(strs(&["a"]), vec![])]);
    assert_eq!(s.files(), &[file("b", 1, "")]);
    assert_eq!(s.outcome().accepted, vec![file("b", 1, "")]);
}

#[test]
fn different_total_notifies_again() {
    let mut s = session(Constraints::new());
    s.handle_input(InputKind::Change, vec![file("a", 1, "")]);
    s.handle_input(InputKind::Change, vec![file("b", 1, ""), file("c", 1, "")]);

    assert_eq!(s.listener().uploads().len(), 2);
}

// --- Deletion ---

#[test]
fn delete_notifies_once_with_remaining_files() {
    let mut s = session(Constraints::new());
    s.handle_input(InputKind::Change, vec![file("A", 1, ""), file("B", 1, "")]);

    s.handle_files_delete(DeleteRequest::new(vec![file("A", 1, "")]));

    assert_eq!(s.files(), &[file("B", 1, "")]);
    assert_eq!(s.picker().files(), &[file("B", 1, "")]);
    assert_eq!(
        s.listener().uploads(),
        vec![(strs(&["A", "B"]), vec![]), (strs(&["B"]), vec![])]
    );
}

#[test]
fn deletion_echo_is_suppressed() {
    let mut s = session(Constraints::new());
    s.handle_input(InputKind::Change, vec![file("A", 1, ""), file("B", 1, "")]);
    s.handle_files_delete(DeleteRequest::new(vec![file("A", 1, "")]));
    assert!(s.state().is_suppressing());

    let before = s.listener().calls.len();
    assert_eq!(s.run_deferred(), 1);

    assert_eq!(s.listener().calls.len(), before);
    assert!(!s.state().is_suppressing());
    assert_eq!(s.files(), &[file("B", 1, "")]);
}

#[test]
fn input_after_echo_is_processed() {
    let mut s = session(Constraints::new());
    s.handle_input(InputKind::Change, vec![file("A", 1, ""), file("B", 1, "")]);
    s.handle_files_delete(DeleteRequest::new(vec![file("A", 1, "")]));
    s.run_deferred();

    s.handle_input(
        InputKind::Drop,
        vec![file("C", 1, ""), file("D", 1, ""), file("E", 1, "")],
    );
    assert_eq!(s.files().len(), 3);
    assert_eq!(s.listener().uploads().len(), 3);
}

#[test]
fn drop_after_delete_is_not_lost() {
    let mut s = session(Constraints::new());
    s.handle_input(InputKind::Change, vec![file("A", 1, ""), file("B", 1, "")]);
    s.handle_files_delete(DeleteRequest::new(vec![file("A", 1, "")]));

    s.handle_input(
        InputKind::Drop,
        vec![file("C", 1, ""), file("D", 1, ""), file("E", 1, "")],
    );
    assert!(!s.state().is_suppressing());
    assert_eq!(s.run_deferred(), 0);

    assert_eq!(names(s.files()), strs(&["C", "D", "E"]));
    assert_eq!(names(s.picker().files()), strs(&["C", "D", "E"]));
    assert!(s
        .listener()
        .calls
        .contains(&Call::Drop(strs(&["C", "D", "E"]))));
    assert_eq!(
        s.listener().uploads().last().cloned(),
        Some((strs(&["C", "D", "E"]), vec![]))
    );
    assert_eq!(s.listener().uploads().len(), 3);
}

#[test]
fn repeated_deletes_queue_a_single_echo() {
    let mut s = session(Constraints::new());
    s.handle_input(
        InputKind::Change,
        vec![file("A", 1, ""), file("B", 1, ""), file("C", 1, "")],
    );
    s.handle_files_delete(DeleteRequest::new(vec![file("A", 1, "")]));
    s.handle_files_delete(DeleteRequest::new(vec![file("B", 1, "")]));
    assert_eq!(s.pending_deferred(), 1);

    assert_eq!(s.run_deferred(), 1);
    assert!(!s.state().is_suppressing());
    assert_eq!(s.files(), &[file("C", 1, "")]);

    s.handle_input(InputKind::Change, vec![file("D", 1, ""), file("E", 1, "")]);
    assert_eq!(s.files().len(), 2);
}

#[test]
fn seed_queued_before_delete_still_runs() {
    let mut s = session(Constraints::new());
    s.handle_input(InputKind::Change, vec![file("A", 1, ""), file("B", 1, "")]);
    s.seed(vec![file("S", 1, ""), file("T", 1, "")]);
    s.handle_files_delete(DeleteRequest::new(vec![file("A", 1, "")]));

    assert_eq!(s.run_deferred(), 2);

    assert_eq!(names(s.files()), strs(&["S", "T"]));
    assert!(!s.state().is_suppressing());
    assert_eq!(
        s.listener().uploads().last().cloned(),
        Some((strs(&["S", "T"]), vec![]))
    );
}

#[test]
fn delete_fixes_batch_violation() {
    let mut s = session(Constraints::new().with_max_files(2));
    let batch = vec![file("a", 1, ""), file("b", 1, ""), file("c", 1, "")];
    s.handle_input(InputKind::Change, batch);
    assert!(s.outcome().accepted.is_empty());

    s.handle_files_delete(DeleteRequest::new(vec![file("c", 1, "")]));

    assert_eq!(
        s.listener().uploads().last().cloned(),
        Some((strs(&["a", "b"]), vec![]))
    );
    assert_eq!(s.picker().files().len(), 2);
}

#[test]
fn delete_with_empty_list_is_noop() {
    let mut s = session(Constraints::new());
    s.handle_input(InputKind::Change, vec![file("A", 1, "")]);
    s.handle_files_delete(DeleteRequest::new(Vec::new()));

    assert_eq!(s.files().len(), 1);
    assert_eq!(s.listener().uploads().len(), 1);
    assert_eq!(s.pending_deferred(), 0);
}

#[test]
fn delete_with_detached_picker_is_noop() {
    let mut s = session(Constraints::new());
    s.handle_input(InputKind::Change, vec![file("A", 1, ""), file("B", 1, "")]);
    s.picker_mut().detach();

    s.handle_files_delete(DeleteRequest::new(vec![file("A", 1, "")]));

    assert_eq!(s.files().len(), 2);
    assert_eq!(s.listener().uploads().len(), 1);
}

#[test]
fn delete_via_dispatch() {
    let mut s = session(Constraints::new());
    s.dispatch(Command::Input {
        kind: InputKind::Drop,
        files: vec![file("A", 1, ""), file("B", 1, "")],
    });
    s.dispatch(Command::Delete(DeleteRequest::new(vec![file("B", 1, "")])));
    assert_eq!(s.files(), &[file("A", 1, "")]);
}

// --- Seed, click, revalidation ---

#[test]
fn seed_runs_as_selection() {
    let mut s = session(Constraints::new().with_max_size(5));
    s.seed(vec![file("ok", 1, ""), file("big", 10, "")]);
    assert!(s.listener().calls.is_empty());

    s.run_deferred();

    let recorder = s.listener();
    assert_eq!(recorder.calls[0], Call::Change(strs(&["ok"])));
    assert_eq!(recorder.uploads(), vec![(strs(&["ok"]), strs(&["big"]))]);
    assert_eq!(s.picker().files(), &[file("ok", 1, "")]);
}

#[test]
fn seed_with_detached_picker_does_nothing() {
    let mut s = session(Constraints::new()).with_picker(PickerMirror::detached());
    s.seed(vec![file("a", 1, "")]);
    s.run_deferred();

    assert!(s.files().is_empty());
    assert!(s.listener().calls.is_empty());
}

#[test]
fn click_resets_selection_after_deferral() {
    let mut s = session(Constraints::new());
    s.handle_input(InputKind::Change, vec![file("a", 1, "")]);

    s.handle_click();
    assert_eq!(s.files().len(), 1);

    s.run_deferred();
    assert!(s.files().is_empty());
    assert!(s.picker().files().is_empty());
    assert_eq!(s.listener().uploads().last().cloned(), Some((vec![], vec![])));
}

#[test]
fn selection_after_click_survives_reset() {
    let mut s = session(Constraints::new());
    s.handle_input(InputKind::Change, vec![file("A", 1, ""), file("B", 1, "")]);
    s.handle_click();

    s.handle_input(InputKind::Change, vec![file("C", 1, "")]);
    assert_eq!(s.run_deferred(), 0);

    assert_eq!(s.files(), &[file("C", 1, "")]);
    assert_eq!(s.picker().files(), &[file("C", 1, "")]);
    assert_eq!(
        s.listener().uploads(),
        vec![(strs(&["A", "B"]), vec![]), (strs(&["C"]), vec![])]
    );
}

#[test]
fn click_on_empty_selection_stays_quiet() {
    let mut s = session(Constraints::new());
    s.dispatch(Command::Click);
    s.run_deferred();
    assert!(s.listener().calls.is_empty());
}

#[test]
fn constraint_change_revalidates_and_notifies() {
    let mut s = session(Constraints::new());
    s.handle_input(InputKind::Change, vec![file("small", 1, ""), file("big", 100, "")]);

    s.set_constraints(Constraints::new().with_max_size(10));

    assert_eq!(
        s.listener().uploads().last().cloned(),
        Some((strs(&["small"]), strs(&["big"])))
    );
    assert_eq!(s.files().len(), 2);
}

#[test]
fn message_change_revalidates_with_new_text() {
    let mut s = session(Constraints::new().with_max_size(10));
    s.handle_input(InputKind::Change, vec![file("big", 100, "")]);

    s.dispatch(Command::SetValidationMessages(vec![FileError::new(
        ErrorKind::FileTooLarge,
        "Keep it under 10 bytes",
    )]));

    assert_eq!(s.listener().uploads().len(), 2);
    assert_eq!(
        s.listener().last_rejections[0].errors[0].message,
        "Keep it under 10 bytes"
    );
}

#[test]
fn revalidate_always_notifies() {
    let mut s = session(Constraints::new());
    s.handle_input(InputKind::Change, vec![file("a", 1, "")]);
    s.revalidate();
    s.revalidate();
    assert_eq!(s.listener().uploads().len(), 3);
}

#[test]
fn borrowed_listener_receives_notifications() {
    let mut recorder = Recorder::default();
    {
        let mut s = Session::new(DropzoneConfig::default(), &mut recorder);
        s.handle_input(InputKind::Drop, vec![file("a", 1, "")]);
    }
    assert_eq!(recorder.uploads(), vec![(strs(&["a"]), vec![])]);
}

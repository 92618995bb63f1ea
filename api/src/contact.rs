use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
    time::Duration,
};

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

// structs and types

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn all() -> Vec<Self> {
        vec![Self::Name, Self::Email, Self::Subject, Self::Message]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    // the html input type, or None for the multi-line message box
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            Self::Name | Self::Subject => Some("text"),
            Self::Email => Some("email"),
            Self::Message => None,
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// the fields as they are sent; this is also the JSON body for the http sender
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    // every field is required; whitespace alone does not count
    pub fn first_missing(&self) -> Option<ContactField> {
        ContactField::all()
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        ContactField::all()
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Failure,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(ContactField),
    #[error("a message is already being sent")]
    AlreadySubmitting,
    #[error("the form cannot be edited while a message is being sent")]
    Locked,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("could not reach the contact service: {0}")]
    Transport(String),
    #[error("the contact service answered with status {0}")]
    Rejected(u16),
}

// what the banner under the form shows, if anything
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Banner {
    Sent,
    Failed(String),
}

// ContactFormState
//
// Idle -> Submitting on a valid submit, Submitting -> Success (fields cleared in
// the same step) or Failure when the sender answers, and back to Idle once the
// banner has been shown.  fields are frozen while Submitting
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    form: ContactForm,
    status: SubmissionStatus,
    error: Option<String>,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_locked(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) -> Result<(), ContactError> {
        if self.is_locked() {
            return Err(ContactError::Locked);
        }

        *self.form.get_mut(field) = value.into();
        Ok(())
    }

    // returns the snapshot that should be handed to the sender
    pub fn begin_submit(&mut self) -> Result<ContactForm, ContactError> {
        if self.is_locked() {
            return Err(ContactError::AlreadySubmitting);
        }

        if let Some(field) = self.form.first_missing() {
            debug!("contact form submit blocked, {field} is empty");
            return Err(ContactError::MissingField(field));
        }

        self.status = SubmissionStatus::Submitting;
        self.error = None;
        Ok(self.form.clone())
    }

    // returns false if there was no submission in flight to complete
    pub fn complete(&mut self, outcome: Result<(), SubmitError>) -> bool {
        if self.status != SubmissionStatus::Submitting {
            warn!("ignoring contact outcome while {:?}", self.status);
            return false;
        }

        match outcome {
            Ok(()) => {
                self.form = ContactForm::default();
                self.status = SubmissionStatus::Success;
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.status = SubmissionStatus::Failure;
            }
        }
        true
    }

    pub fn dismiss_banner(&mut self) {
        if matches!(self.status, SubmissionStatus::Success | SubmissionStatus::Failure) {
            self.status = SubmissionStatus::Idle;
            self.error = None;
        }
    }

    pub fn banner(&self) -> Option<Banner> {
        match self.status {
            SubmissionStatus::Success => Some(Banner::Sent),
            SubmissionStatus::Failure => Some(Banner::Failed(self.error.clone().unwrap_or_default())),
            _ => None,
        }
    }
}

// ContactSubmitter
//
// the seam between the form and whatever actually delivers the message
#[async_trait(?Send)]
pub trait ContactSubmitter {
    async fn submit(&self, form: &ContactForm) -> Result<(), SubmitError>;
}

#[async_trait(?Send)]
pub trait Sleep {
    async fn sleep(&self, duration: Duration);
}

// SimulatedSubmitter
//
// MOCK: nothing is sent anywhere.  waits for the configured delay and reports
// success, which is all the stock site does
pub struct SimulatedSubmitter<S> {
    sleeper: S,
    delay: Duration,
}

impl<S: Sleep> SimulatedSubmitter<S> {
    pub fn new(sleeper: S, delay: Duration) -> Self {
        SimulatedSubmitter { sleeper, delay }
    }
}

#[async_trait(?Send)]
impl<S: Sleep> ContactSubmitter for SimulatedSubmitter<S> {
    async fn submit(&self, form: &ContactForm) -> Result<(), SubmitError> {
        debug!("simulating contact submission from {}", form.email);
        self.sleeper.sleep(self.delay).await;
        Ok(())
    }
}

// posts the form as JSON to the configured endpoint
pub struct HttpSubmitter {
    endpoint: String,
}

impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        HttpSubmitter {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl ContactSubmitter for HttpSubmitter {
    async fn submit(&self, form: &ContactForm) -> Result<(), SubmitError> {
        let resp = Request::post(&self.endpoint)
            .json(form)
            .map_err(|err| SubmitError::Transport(err.to_string()))?
            .send()
            .await
            .map_err(|err| SubmitError::Transport(err.to_string()))?;

        if resp.ok() {
            Ok(())
        } else {
            Err(SubmitError::Rejected(resp.status()))
        }
    }
}

// FormStore
//
// wherever the state lives (a signal in the webapp); every access is a short,
// non-reentrant update
pub trait FormStore {
    fn update<R>(&mut self, f: impl FnOnce(&mut ContactFormState) -> R) -> R;
}

impl FormStore for Rc<RefCell<ContactFormState>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut ContactFormState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

// PendingSubmission
//
// holds the cancel handle of the submission in flight.  a new submission
// cancels the previous one, so an old banner timer cannot dismiss the new
// banner, and whatever is left is cancelled when the guard is dropped
#[derive(Default)]
pub struct PendingSubmission(Cell<Option<Box<dyn FnOnce()>>>);

impl PendingSubmission {
    pub fn replace(&self, cancel: impl FnOnce() + 'static) {
        if let Some(old) = self.0.replace(Some(Box::new(cancel))) {
            debug!("cancelling previous contact submission");
            old();
        }
    }
}

impl Drop for PendingSubmission {
    fn drop(&mut self) {
        if let Some(cancel) = self.0.take() {
            debug!("cancelling pending contact submission");
            cancel();
        }
    }
}

// the asynchronous half of a submission, run after begin_submit has accepted it
//
// dropping the returned future cancels both the send and the banner timer
pub async fn finish_submission<St, Sub, Sl>(
    mut store: St,
    form: ContactForm,
    submitter: &Sub,
    sleeper: &Sl,
    banner: Duration,
) where
    St: FormStore,
    Sub: ContactSubmitter + ?Sized,
    Sl: Sleep + ?Sized,
{
    let outcome = submitter.submit(&form).await;

    match &outcome {
        Ok(()) => info!("contact message from {} sent", form.email),
        Err(err) => warn!("contact message from {} failed: {err}", form.email),
    }

    if !store.update(|state| state.complete(outcome)) {
        return;
    }

    sleeper.sleep(banner).await;
    store.update(|state| state.dismiss_banner());
}

#[cfg(test)]
mod tests {
    use std::{future::Future, pin::Pin, task::Context};

    use futures::{FutureExt, executor::block_on, task::noop_waker_ref};

    use super::*;

    const SUBMIT_DELAY: Duration = Duration::from_millis(2000);
    const BANNER: Duration = Duration::from_millis(3000);

    // records what the page looked like each time a timer started
    #[derive(Clone, Debug, PartialEq)]
    struct Observed {
        slept: Duration,
        status: SubmissionStatus,
        cleared: bool,
        banner: Option<Banner>,
    }

    #[derive(Clone)]
    struct RecordingSleep {
        store: Rc<RefCell<ContactFormState>>,
        log: Rc<RefCell<Vec<Observed>>>,
    }

    #[async_trait(?Send)]
    impl Sleep for RecordingSleep {
        async fn sleep(&self, duration: Duration) {
            let state = self.store.borrow();
            self.log.borrow_mut().push(Observed {
                slept: duration,
                status: state.status(),
                cleared: state.form().is_empty(),
                banner: state.banner(),
            });
        }
    }

    struct FailingSubmitter;

    #[async_trait(?Send)]
    impl ContactSubmitter for FailingSubmitter {
        async fn submit(&self, _form: &ContactForm) -> Result<(), SubmitError> {
            Err(SubmitError::Rejected(503))
        }
    }

    struct InstantSubmitter;

    #[async_trait(?Send)]
    impl ContactSubmitter for InstantSubmitter {
        async fn submit(&self, _form: &ContactForm) -> Result<(), SubmitError> {
            Ok(())
        }
    }

    // a timer that never fires
    struct NeverSleep;

    #[async_trait(?Send)]
    impl Sleep for NeverSleep {
        async fn sleep(&self, _duration: Duration) {
            futures::future::pending::<()>().await;
        }
    }

    type Running = Rc<RefCell<Option<Pin<Box<dyn Future<Output = ()>>>>>>;

    fn start(store: Rc<RefCell<ContactFormState>>) -> Running {
        let form = store.borrow_mut().begin_submit().unwrap();
        let fut: Pin<Box<dyn Future<Output = ()>>> = Box::pin(async move {
            finish_submission(store, form, &InstantSubmitter, &NeverSleep, BANNER).await;
        });
        Rc::new(RefCell::new(Some(fut)))
    }

    // true once the submission has run to the end
    fn poll_once(running: &Running) -> bool {
        let mut cx = Context::from_waker(noop_waker_ref());
        match running.borrow_mut().as_mut() {
            Some(fut) => fut.as_mut().poll(&mut cx).is_ready(),
            None => false,
        }
    }

    fn canceller(running: &Running) -> impl FnOnce() + 'static {
        let running = running.clone();
        move || {
            running.borrow_mut().take();
        }
    }

    fn filled() -> ContactFormState {
        let mut state = ContactFormState::new();
        state.set_field(ContactField::Name, "A").unwrap();
        state.set_field(ContactField::Email, "a@a.com").unwrap();
        state.set_field(ContactField::Subject, "S").unwrap();
        state.set_field(ContactField::Message, "M").unwrap();
        state
    }

    fn harness(state: ContactFormState) -> (Rc<RefCell<ContactFormState>>, RecordingSleep) {
        let store = Rc::new(RefCell::new(state));
        let sleeper = RecordingSleep {
            store: store.clone(),
            log: Rc::new(RefCell::new(Vec::new())),
        };
        (store, sleeper)
    }

    #[test]
    fn any_missing_field_blocks_submit() {
        for missing in ContactField::all() {
            let mut state = filled();
            state.set_field(missing, "").unwrap();

            assert_eq!(state.begin_submit(), Err(ContactError::MissingField(missing)));
            assert_eq!(state.status(), SubmissionStatus::Idle);
        }

        let mut blank = filled();
        blank.set_field(ContactField::Subject, "   ").unwrap();
        assert_eq!(
            blank.begin_submit(),
            Err(ContactError::MissingField(ContactField::Subject))
        );
    }

    #[test]
    fn submitting_locks_the_form() {
        let mut state = filled();

        let sent = state.begin_submit().unwrap();
        assert_eq!(sent.name, "A");
        assert_eq!(state.status(), SubmissionStatus::Submitting);
        assert!(state.is_locked());

        assert_eq!(state.begin_submit(), Err(ContactError::AlreadySubmitting));
        assert_eq!(state.set_field(ContactField::Name, "B"), Err(ContactError::Locked));
        assert_eq!(state.form().name, "A");
    }

    #[test]
    fn success_clears_fields_in_the_same_step() {
        let mut state = filled();
        state.begin_submit().unwrap();

        assert!(state.complete(Ok(())));
        assert_eq!(state.status(), SubmissionStatus::Success);
        assert!(state.form().is_empty());
        assert_eq!(state.banner(), Some(Banner::Sent));

        state.dismiss_banner();
        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert_eq!(state.banner(), None);
    }

    #[test]
    fn stale_outcomes_are_ignored() {
        let mut state = filled();
        assert!(!state.complete(Ok(())));
        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert_eq!(state.form().name, "A");

        // dismissing with nothing shown is a no-op
        state.dismiss_banner();
        assert_eq!(state, filled());
    }

    #[test]
    fn simulated_submission_timeline() {
        let (store, sleeper) = harness(filled());
        let submitter = SimulatedSubmitter::new(sleeper.clone(), SUBMIT_DELAY);

        let form = store.borrow_mut().begin_submit().unwrap();
        assert_eq!(store.borrow().status(), SubmissionStatus::Submitting);

        block_on(finish_submission(store.clone(), form, &submitter, &sleeper, BANNER));

        let log = sleeper.log.borrow().clone();
        assert_eq!(
            log,
            vec![
                // the simulated send, fields still present and no banner
                Observed {
                    slept: SUBMIT_DELAY,
                    status: SubmissionStatus::Submitting,
                    cleared: false,
                    banner: None,
                },
                // the banner window, shown only after the fields were cleared
                Observed {
                    slept: BANNER,
                    status: SubmissionStatus::Success,
                    cleared: true,
                    banner: Some(Banner::Sent),
                },
            ]
        );

        let state = store.borrow();
        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert!(state.form().is_empty());
        assert_eq!(state.banner(), None);
    }

    #[test]
    fn failure_keeps_fields_and_shows_reason() {
        let (store, sleeper) = harness(filled());

        let form = store.borrow_mut().begin_submit().unwrap();
        block_on(finish_submission(store.clone(), form, &FailingSubmitter, &sleeper, BANNER));

        let log = sleeper.log.borrow().clone();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].slept, BANNER);
        assert_eq!(log[0].status, SubmissionStatus::Failure);
        assert_eq!(
            log[0].banner,
            Some(Banner::Failed(SubmitError::Rejected(503).to_string()))
        );

        // back to idle with the message still there to retry
        let mut state = store.borrow_mut();
        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert_eq!(state.form().message, "M");
        assert!(state.begin_submit().is_ok());
    }

    #[test]
    fn no_banner_timer_without_a_submission() {
        let (store, sleeper) = harness(filled());

        // the form was never accepted, so the outcome is stale
        block_on(finish_submission(
            store.clone(),
            ContactForm::default(),
            &FailingSubmitter,
            &sleeper,
            BANNER,
        ));

        assert!(sleeper.log.borrow().is_empty());
        assert_eq!(*store.borrow(), filled());
    }

    #[test]
    fn submitter_works_behind_a_trait_object() {
        let (store, sleeper) = harness(filled());
        let submitter: Rc<dyn ContactSubmitter> =
            Rc::new(SimulatedSubmitter::new(sleeper.clone(), SUBMIT_DELAY));

        let form = store.borrow_mut().begin_submit().unwrap();
        block_on(finish_submission(store.clone(), form, submitter.as_ref(), &sleeper, BANNER));

        assert_eq!(store.borrow().status(), SubmissionStatus::Idle);
        assert_eq!(sleeper.log.borrow().len(), 2);
    }

    #[test]
    fn dropping_during_the_banner_leaves_the_state_alone() {
        let store = Rc::new(RefCell::new(filled()));
        let form = store.borrow_mut().begin_submit().unwrap();

        let fut = finish_submission(store.clone(), form, &InstantSubmitter, &NeverSleep, BANNER);
        assert_eq!(fut.now_or_never(), None);

        // the banner timer went with the future, so nothing dismisses it
        let state = store.borrow();
        assert_eq!(state.status(), SubmissionStatus::Success);
        assert_eq!(state.banner(), Some(Banner::Sent));
        assert!(state.form().is_empty());
    }

    #[test]
    fn dropping_during_the_send_leaves_the_fields() {
        let store = Rc::new(RefCell::new(filled()));
        let form = store.borrow_mut().begin_submit().unwrap();
        let submitter = SimulatedSubmitter::new(NeverSleep, SUBMIT_DELAY);

        let fut = finish_submission(store.clone(), form, &submitter, &NeverSleep, BANNER);
        assert_eq!(fut.now_or_never(), None);

        assert_eq!(store.borrow().status(), SubmissionStatus::Submitting);
        assert_eq!(store.borrow().form().message, "M");
    }

    #[test]
    fn pending_submission_cancels_once() {
        let cancelled = Rc::new(Cell::new(Vec::new()));
        let record = |id: u32| {
            let cancelled = cancelled.clone();
            move || {
                let mut seen = cancelled.take();
                seen.push(id);
                cancelled.set(seen);
            }
        };

        let pending = PendingSubmission::default();
        pending.replace(record(1));
        assert_eq!(cancelled.take(), Vec::<u32>::new());

        pending.replace(record(2));
        assert_eq!(cancelled.take(), vec![1]);

        drop(pending);
        assert_eq!(cancelled.take(), vec![2]);
    }

    #[test]
    fn resubmitting_cancels_the_old_banner_timer() {
        let store = Rc::new(RefCell::new(filled()));
        let pending = PendingSubmission::default();

        let first = start(store.clone());
        pending.replace(canceller(&first));
        assert!(!poll_once(&first));
        assert_eq!(store.borrow().status(), SubmissionStatus::Success);

        // a second message while the first banner is still up
        {
            let mut state = store.borrow_mut();
            state.set_field(ContactField::Name, "B").unwrap();
            state.set_field(ContactField::Email, "b@b.com").unwrap();
            state.set_field(ContactField::Subject, "T").unwrap();
            state.set_field(ContactField::Message, "N").unwrap();
        }
        let second = start(store.clone());
        pending.replace(canceller(&second));

        assert!(first.borrow().is_none());
        assert!(!poll_once(&first));
        assert!(second.borrow().is_some());

        // only the second submission's own outcome moves the state on
        assert!(!poll_once(&second));
        assert_eq!(store.borrow().status(), SubmissionStatus::Success);

        drop(pending);
        assert!(second.borrow().is_none());
        assert_eq!(store.borrow().banner(), Some(Banner::Sent));
    }

    #[test]
    fn only_the_message_is_multi_line() {
        assert_eq!(ContactField::Name.input_type(), Some("text"));
        assert_eq!(ContactField::Email.input_type(), Some("email"));
        assert_eq!(ContactField::Subject.input_type(), Some("text"));
        assert_eq!(ContactField::Message.input_type(), None);
    }
}

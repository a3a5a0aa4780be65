use thelin_client::{
    ApiError, BookAddition, BookStatus, BusinessIdea, Health, IdeaStatus, Lifelog, Question,
};

use crate::controller::DashboardData;
use crate::events::DataEvent;
use crate::session::Session;
use crate::view::PageSlot;

/// Canonical error text for a missing detail entity. Detail screens render
/// it with a back action only, no retry.
pub const NOT_FOUND: &str = "Not Found";

fn detail_error(err: ApiError) -> String {
    if err.is_not_found() {
        NOT_FOUND.to_string()
    } else {
        err.to_string()
    }
}

/// Application state management
#[derive(Debug)]
pub struct AppState {
    pub session: Session,
    pub current_screen: Screen,
    pub page_size: u32,

    pub dashboard: PageSlot<DashboardData>,
    pub books: PageSlot<Vec<BookAddition>>,
    pub book_detail: PageSlot<BookAddition>,
    pub ideas: PageSlot<Vec<BusinessIdea>>,
    pub idea_detail: PageSlot<BusinessIdea>,
    pub questions: PageSlot<Vec<Question>>,
    pub lifelogs: PageSlot<Vec<Lifelog>>,
    pub lifelog_detail: PageSlot<Lifelog>,

    /// Entity the open detail screen belongs to.
    pub detail_id: Option<String>,
    pub selected_book: Option<usize>,
    pub selected_idea: Option<usize>,
    pub selected_question: Option<usize>,
    pub selected_lifelog: Option<usize>,

    pub lifelog_offset: u32,
    pub classified_only: bool,

    /// Connectivity indicator driven by the health probe (and flipped false
    /// when a dashboard batch fails). None until the first probe settles.
    pub api_connected: Option<bool>,
    pub health: Option<Health>,

    /// One-line notification area; write failures surface here.
    pub notice: Option<String>,

    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    BookList,
    BookDetail,
    IdeaList,
    IdeaDetail,
    QuestionList,
    LifelogList,
    LifelogDetail,
    Status,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::BookList | Screen::BookDetail => "Book Additions",
            Screen::IdeaList | Screen::IdeaDetail => "Business Ideas",
            Screen::QuestionList => "Questions",
            Screen::LifelogList | Screen::LifelogDetail => "Lifelogs",
            Screen::Status => "Status",
        }
    }
}

/// Modal input on top of normal key handling.
#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    /// Composing optional feedback for a reject. The pending id is kept here
    /// so the write targets the entity the prompt was opened for.
    RejectFeedback { id: String, buffer: String },
    /// Choosing an answer option. The prompt and options are captured when
    /// the picker opens, so a refetch landing mid-pick cannot redirect the
    /// submission to a different question.
    AnswerPick {
        id: String,
        prompt: String,
        options: Vec<String>,
        selected: usize,
    },
}

/// Follow-up work the app must schedule after a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    /// Answering removes an item from a filtered collection, so the pending
    /// list and the stats aggregate are refetched rather than patched.
    RefetchQuestionsAndStats,
}

impl AppState {
    pub fn new(session: Session, page_size: u32) -> Self {
        Self {
            session,
            current_screen: Screen::Dashboard,
            page_size,
            dashboard: PageSlot::default(),
            books: PageSlot::default(),
            book_detail: PageSlot::default(),
            ideas: PageSlot::default(),
            idea_detail: PageSlot::default(),
            questions: PageSlot::default(),
            lifelogs: PageSlot::default(),
            lifelog_detail: PageSlot::default(),
            detail_id: None,
            selected_book: None,
            selected_idea: None,
            selected_question: None,
            selected_lifelog: None,
            lifelog_offset: 0,
            classified_only: false,
            api_connected: None,
            health: None,
            notice: None,
            input_mode: InputMode::Normal,
        }
    }

    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    /// Apply a completed fetch or write. Returns follow-up work, if any.
    pub fn handle_data(&mut self, event: DataEvent) -> Option<FollowUp> {
        match event {
            DataEvent::Dashboard(generation, result) => {
                let failed = result.is_err();
                if self
                    .dashboard
                    .apply(generation, result.map_err(|e| e.to_string()))
                    && failed
                {
                    self.api_connected = Some(false);
                }
                None
            }
            DataEvent::Health(result) => {
                match result {
                    Ok(health) => {
                        self.api_connected = Some(true);
                        self.health = Some(health);
                    }
                    Err(_) => {
                        self.api_connected = Some(false);
                        self.health = None;
                    }
                }
                None
            }
            DataEvent::Books(generation, result) => {
                if self
                    .books
                    .apply(generation, result.map_err(|e| e.to_string()))
                {
                    self.clamp_book_selection();
                }
                None
            }
            DataEvent::BookDetail(generation, result) => {
                self.book_detail.apply(generation, result.map_err(detail_error));
                None
            }
            DataEvent::Ideas(generation, result) => {
                if self
                    .ideas
                    .apply(generation, result.map_err(|e| e.to_string()))
                {
                    self.clamp_idea_selection();
                }
                None
            }
            DataEvent::IdeaDetail(generation, result) => {
                self.idea_detail.apply(generation, result.map_err(detail_error));
                None
            }
            DataEvent::Questions(generation, result) => {
                if self
                    .questions
                    .apply(generation, result.map_err(|e| e.to_string()))
                {
                    self.clamp_question_selection();
                }
                None
            }
            DataEvent::Lifelogs(generation, result) => {
                if self
                    .lifelogs
                    .apply(generation, result.map_err(|e| e.to_string()))
                {
                    self.clamp_lifelog_selection();
                }
                None
            }
            DataEvent::LifelogDetail(generation, result) => {
                self.lifelog_detail
                    .apply(generation, result.map_err(detail_error));
                None
            }
            DataEvent::BookWrite { id, target, result } => {
                self.books.end_mutation();
                self.book_detail.end_mutation();
                match result {
                    Ok(_) => {
                        self.apply_book_status(&id, target);
                        self.set_notice(format!("Book addition {target}"));
                    }
                    Err(err) => self.set_notice(format!("Action failed: {err}")),
                }
                None
            }
            DataEvent::IdeaWrite { id, target, result } => {
                self.ideas.end_mutation();
                self.idea_detail.end_mutation();
                match result {
                    Ok(_) => {
                        self.apply_idea_status(&id, target);
                        self.set_notice(format!("Idea status set to {target}"));
                    }
                    Err(err) => self.set_notice(format!("Action failed: {err}")),
                }
                None
            }
            DataEvent::AnswerWrite { result, .. } => {
                self.questions.end_mutation();
                match result {
                    Ok(_) => {
                        self.set_notice("Answer recorded");
                        Some(FollowUp::RefetchQuestionsAndStats)
                    }
                    Err(err) => {
                        self.set_notice(format!("Answer failed: {err}"));
                        None
                    }
                }
            }
        }
    }

    /// Patch every local copy of a book addition after a confirmed write.
    /// Only ever called with a status the write itself produced.
    fn apply_book_status(&mut self, id: &str, status: BookStatus) {
        if let Some(books) = self.books.data_mut().as_ready_mut() {
            if let Some(book) = books.iter_mut().find(|b| b.id == id) {
                book.status = status;
            }
        }
        if let Some(book) = self.book_detail.data_mut().as_ready_mut() {
            if book.id == id {
                book.status = status;
            }
        }
        if let Some(dashboard) = self.dashboard.data_mut().as_ready_mut() {
            if let Some(book) = dashboard.recent_books.iter_mut().find(|b| b.id == id) {
                book.status = status;
            }
        }
    }

    fn apply_idea_status(&mut self, id: &str, status: IdeaStatus) {
        if let Some(ideas) = self.ideas.data_mut().as_ready_mut() {
            if let Some(idea) = ideas.iter_mut().find(|i| i.id == id) {
                idea.status = status;
            }
        }
        if let Some(idea) = self.idea_detail.data_mut().as_ready_mut() {
            if idea.id == id {
                idea.status = status;
            }
        }
        if let Some(dashboard) = self.dashboard.data_mut().as_ready_mut() {
            if let Some(idea) = dashboard.recent_ideas.iter_mut().find(|i| i.id == id) {
                idea.status = status;
            }
        }
    }

    pub fn selected_book(&self) -> Option<&BookAddition> {
        let books = self.books.data().as_ready()?;
        self.selected_book.and_then(|index| books.get(index))
    }

    pub fn selected_idea(&self) -> Option<&BusinessIdea> {
        let ideas = self.ideas.data().as_ready()?;
        self.selected_idea.and_then(|index| ideas.get(index))
    }

    pub fn selected_question(&self) -> Option<&Question> {
        let questions = self.questions.data().as_ready()?;
        self.selected_question.and_then(|index| questions.get(index))
    }

    pub fn selected_lifelog(&self) -> Option<&Lifelog> {
        let lifelogs = self.lifelogs.data().as_ready()?;
        self.selected_lifelog.and_then(|index| lifelogs.get(index))
    }

    pub fn select_next(&mut self) {
        match self.current_screen {
            Screen::BookList => {
                let len = self.books.data().as_ready().map_or(0, Vec::len);
                Self::step_selection(&mut self.selected_book, len, 1);
            }
            Screen::IdeaList => {
                let len = self.ideas.data().as_ready().map_or(0, Vec::len);
                Self::step_selection(&mut self.selected_idea, len, 1);
            }
            Screen::QuestionList => {
                let len = self.questions.data().as_ready().map_or(0, Vec::len);
                Self::step_selection(&mut self.selected_question, len, 1);
            }
            Screen::LifelogList => {
                let len = self.lifelogs.data().as_ready().map_or(0, Vec::len);
                Self::step_selection(&mut self.selected_lifelog, len, 1);
            }
            _ => {}
        }
    }

    pub fn select_previous(&mut self) {
        match self.current_screen {
            Screen::BookList => {
                let len = self.books.data().as_ready().map_or(0, Vec::len);
                Self::step_selection(&mut self.selected_book, len, -1);
            }
            Screen::IdeaList => {
                let len = self.ideas.data().as_ready().map_or(0, Vec::len);
                Self::step_selection(&mut self.selected_idea, len, -1);
            }
            Screen::QuestionList => {
                let len = self.questions.data().as_ready().map_or(0, Vec::len);
                Self::step_selection(&mut self.selected_question, len, -1);
            }
            Screen::LifelogList => {
                let len = self.lifelogs.data().as_ready().map_or(0, Vec::len);
                Self::step_selection(&mut self.selected_lifelog, len, -1);
            }
            _ => {}
        }
    }

    fn step_selection(selection: &mut Option<usize>, len: usize, delta: isize) {
        if len == 0 {
            *selection = None;
            return;
        }
        let next = match (*selection, delta) {
            (None, d) if d > 0 => 0,
            (None, _) => len - 1,
            (Some(index), d) => {
                let moved = index as isize + d;
                moved.rem_euclid(len as isize) as usize
            }
        };
        *selection = Some(next);
    }

    fn clamp_book_selection(&mut self) {
        let len = self.books.data().as_ready().map_or(0, Vec::len);
        Self::clamp(&mut self.selected_book, len);
    }

    fn clamp_idea_selection(&mut self) {
        let len = self.ideas.data().as_ready().map_or(0, Vec::len);
        Self::clamp(&mut self.selected_idea, len);
    }

    fn clamp_question_selection(&mut self) {
        let len = self.questions.data().as_ready().map_or(0, Vec::len);
        Self::clamp(&mut self.selected_question, len);
    }

    fn clamp_lifelog_selection(&mut self) {
        let len = self.lifelogs.data().as_ready().map_or(0, Vec::len);
        Self::clamp(&mut self.selected_lifelog, len);
    }

    fn clamp(selection: &mut Option<usize>, len: usize) {
        match *selection {
            Some(_) if len == 0 => *selection = None,
            Some(index) if index >= len => *selection = Some(len - 1),
            None if len > 0 => *selection = Some(0),
            _ => {}
        }
    }

    /// Advance the lifelog page. Returns true when the offset changed and a
    /// refetch is due.
    pub fn lifelog_next_page(&mut self) -> bool {
        let current_len = self.lifelogs.data().as_ready().map_or(0, Vec::len);
        // A short page means the collection is exhausted.
        if (current_len as u32) < self.page_size {
            return false;
        }
        self.lifelog_offset += self.page_size;
        self.selected_lifelog = None;
        true
    }

    pub fn lifelog_previous_page(&mut self) -> bool {
        if self.lifelog_offset == 0 {
            return false;
        }
        self.lifelog_offset = self.lifelog_offset.saturating_sub(self.page_size);
        self.selected_lifelog = None;
        true
    }

    pub fn toggle_classified_only(&mut self) {
        self.classified_only = !self.classified_only;
        self.lifelog_offset = 0;
        self.selected_lifelog = None;
    }

    /// Open the reject-feedback prompt for the selected book addition.
    pub fn start_reject_feedback(&mut self, id: String) {
        self.input_mode = InputMode::RejectFeedback {
            id,
            buffer: String::new(),
        };
    }

    /// Open the answer picker for the selected question. Refuses questions
    /// with no options, which would have nothing to submit.
    pub fn start_answer_pick(&mut self) -> bool {
        match self.selected_question() {
            Some(question) if !question.options.is_empty() => {
                self.input_mode = InputMode::AnswerPick {
                    id: question.id.clone(),
                    prompt: question.question.clone(),
                    options: question.options.clone(),
                    selected: 0,
                };
                true
            }
            _ => false,
        }
    }

    pub fn answer_pick_move(&mut self, delta: isize) {
        if let InputMode::AnswerPick {
            options, selected, ..
        } = &mut self.input_mode
        {
            if options.is_empty() {
                return;
            }
            let moved = *selected as isize + delta;
            *selected = moved.rem_euclid(options.len() as isize) as usize;
        }
    }

    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn input_push_char(&mut self, c: char) {
        if let InputMode::RejectFeedback { buffer, .. } = &mut self.input_mode {
            buffer.push(c);
        }
    }

    pub fn input_backspace(&mut self) {
        if let InputMode::RejectFeedback { buffer, .. } = &mut self.input_mode {
            buffer.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use thelin_client::SourceType;

    fn signed_in_state() -> AppState {
        AppState::new(Session::signed_in("bjorn"), 20)
    }

    fn book(id: &str, status: BookStatus) -> BookAddition {
        BookAddition {
            id: id.to_string(),
            chapter: Some("Chapter 1".to_string()),
            content_markdown: "## Draft".to_string(),
            status,
            created_at: Utc::now(),
            lifelog_id: format!("ll-{id}"),
            lifelog_content: None,
        }
    }

    fn idea(id: &str, status: IdeaStatus) -> BusinessIdea {
        BusinessIdea {
            id: id.to_string(),
            title: "Idea".to_string(),
            summary: "summary".to_string(),
            status,
            related_ventures: vec!["Alpha".to_string()],
            created_at: Utc::now(),
            lifelog_id: format!("ll-{id}"),
        }
    }

    fn question(id: &str, options: &[&str]) -> Question {
        Question {
            id: id.to_string(),
            question: "Which venture?".to_string(),
            context: None,
            options: options.iter().map(|s| s.to_string()).collect(),
            source_type: SourceType::Business,
            created_at: Utc::now(),
            status: thelin_client::QuestionStatus::Pending,
        }
    }

    fn ack() -> thelin_client::ActionAck {
        thelin_client::ActionAck {
            status: "ok".to_string(),
            message: "updated".to_string(),
        }
    }

    fn api_failure() -> ApiError {
        ApiError::Status {
            status: 500,
            reason: "Internal Server Error".to_string(),
        }
    }

    #[test]
    fn successful_list_fetch_populates_full_length() {
        let mut state = signed_in_state();
        let generation = state.books.begin_fetch();
        state.handle_data(DataEvent::Books(
            generation,
            Ok(vec![book("a", BookStatus::Pending), book("b", BookStatus::Review)]),
        ));
        assert_eq!(state.books.data().as_ready().unwrap().len(), 2);
        assert_eq!(state.selected_book, Some(0));
    }

    #[test]
    fn failed_fetch_reports_error_and_no_partial_data() {
        let mut state = signed_in_state();
        let generation = state.books.begin_fetch();
        state.handle_data(DataEvent::Books(generation, Err(api_failure())));
        assert!(state.books.data().error().is_some());
        assert!(state.books.data().as_ready().is_none());
    }

    #[test]
    fn dashboard_batch_failure_marks_api_disconnected() {
        let mut state = signed_in_state();
        state.api_connected = Some(true);
        let generation = state.dashboard.begin_fetch();
        state.handle_data(DataEvent::Dashboard(generation, Err(api_failure())));
        assert_eq!(state.api_connected, Some(false));
        assert!(state.dashboard.data().error().is_some());
    }

    #[test]
    fn health_probe_drives_connectivity_flag() {
        let mut state = signed_in_state();
        state.handle_data(DataEvent::Health(Ok(thelin_client::Health {
            status: "ok".to_string(),
            database: "ok".to_string(),
        })));
        assert_eq!(state.api_connected, Some(true));

        state.handle_data(DataEvent::Health(Err(api_failure())));
        assert_eq!(state.api_connected, Some(false));
        assert!(state.health.is_none());
    }

    #[test]
    fn stale_list_response_is_discarded() {
        let mut state = signed_in_state();
        let stale = state.books.begin_fetch();
        let current = state.books.begin_fetch();
        state.handle_data(DataEvent::Books(stale, Ok(vec![book("old", BookStatus::Pending)])));
        assert!(state.books.data().is_loading());
        state.handle_data(DataEvent::Books(current, Ok(vec![book("new", BookStatus::Pending)])));
        assert_eq!(state.books.data().as_ready().unwrap()[0].id, "new");
    }

    #[test]
    fn confirmed_approve_patches_every_local_copy() {
        let mut state = signed_in_state();
        let list_gen = state.books.begin_fetch();
        state.handle_data(DataEvent::Books(list_gen, Ok(vec![book("a", BookStatus::Pending)])));
        let detail_gen = state.book_detail.begin_fetch();
        state.handle_data(DataEvent::BookDetail(detail_gen, Ok(book("a", BookStatus::Pending))));

        state.books.begin_mutation();
        state.handle_data(DataEvent::BookWrite {
            id: "a".to_string(),
            target: BookStatus::Approved,
            result: Ok(ack()),
        });

        assert_eq!(
            state.books.data().as_ready().unwrap()[0].status,
            BookStatus::Approved
        );
        assert_eq!(
            state.book_detail.data().as_ready().unwrap().status,
            BookStatus::Approved
        );
        assert!(!state.books.is_mutating());
    }

    #[test]
    fn approve_on_already_approved_is_a_safe_noop() {
        let mut state = signed_in_state();
        let generation = state.books.begin_fetch();
        state.handle_data(DataEvent::Books(generation, Ok(vec![book("a", BookStatus::Approved)])));

        state.handle_data(DataEvent::BookWrite {
            id: "a".to_string(),
            target: BookStatus::Approved,
            result: Ok(ack()),
        });
        assert_eq!(
            state.books.data().as_ready().unwrap()[0].status,
            BookStatus::Approved
        );
    }

    #[test]
    fn idea_status_update_is_visible_without_refetch() {
        let mut state = signed_in_state();
        let generation = state.ideas.begin_fetch();
        state.handle_data(DataEvent::Ideas(generation, Ok(vec![idea("abc", IdeaStatus::New)])));

        state.handle_data(DataEvent::IdeaWrite {
            id: "abc".to_string(),
            target: IdeaStatus::Archived,
            result: Ok(ack()),
        });

        assert_eq!(
            state.ideas.data().as_ready().unwrap()[0].status,
            IdeaStatus::Archived
        );
        // No fetch is pending; the patch alone updated the view.
        assert!(!state.ideas.data().is_loading());
    }

    #[test]
    fn failed_write_leaves_status_untouched_and_surfaces_notice() {
        let mut state = signed_in_state();
        let generation = state.ideas.begin_fetch();
        state.handle_data(DataEvent::Ideas(generation, Ok(vec![idea("abc", IdeaStatus::New)])));

        state.ideas.begin_mutation();
        state.handle_data(DataEvent::IdeaWrite {
            id: "abc".to_string(),
            target: IdeaStatus::InProgress,
            result: Err(api_failure()),
        });

        assert_eq!(
            state.ideas.data().as_ready().unwrap()[0].status,
            IdeaStatus::New
        );
        assert!(state.notice.as_deref().unwrap().contains("failed"));
        assert!(!state.ideas.is_mutating());
    }

    #[test]
    fn answered_question_triggers_refetch_and_leaves_pending_list() {
        let mut state = signed_in_state();
        let generation = state.questions.begin_fetch();
        state.handle_data(DataEvent::Questions(
            generation,
            Ok(vec![question("q-1", &["Alpha", "Beta"]), question("q-2", &["Yes", "No"])]),
        ));

        state.questions.begin_mutation();
        let follow_up = state.handle_data(DataEvent::AnswerWrite {
            id: "q-1".to_string(),
            result: Ok(ack()),
        });
        assert_eq!(follow_up, Some(FollowUp::RefetchQuestionsAndStats));

        // The refetched pending set excludes the answered question.
        let refetch = state.questions.begin_fetch();
        state.handle_data(DataEvent::Questions(refetch, Ok(vec![question("q-2", &["Yes", "No"])])));
        let pending = state.questions.data().as_ready().unwrap();
        assert_eq!(pending.len(), 1);
        assert!(pending.iter().all(|q| q.id != "q-1"));
    }

    #[test]
    fn failed_answer_schedules_no_refetch() {
        let mut state = signed_in_state();
        let generation = state.questions.begin_fetch();
        state.handle_data(DataEvent::Questions(generation, Ok(vec![question("q-1", &["A"])])));

        let follow_up = state.handle_data(DataEvent::AnswerWrite {
            id: "q-1".to_string(),
            result: Err(api_failure()),
        });
        assert_eq!(follow_up, None);
        assert_eq!(state.questions.data().as_ready().unwrap().len(), 1);
    }

    #[test]
    fn missing_detail_renders_canonical_not_found() {
        let mut state = signed_in_state();
        let generation = state.book_detail.begin_fetch();
        state.handle_data(DataEvent::BookDetail(
            generation,
            Err(ApiError::NotFound("/api/book-additions/xyz".to_string())),
        ));
        assert_eq!(state.book_detail.data().error(), Some(NOT_FOUND));
    }

    #[test]
    fn answer_picker_requires_options() {
        let mut state = signed_in_state();
        let generation = state.questions.begin_fetch();
        state.handle_data(DataEvent::Questions(generation, Ok(vec![question("q-1", &[])])));
        assert!(!state.start_answer_pick());
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn answer_picker_wraps_around_options() {
        let mut state = signed_in_state();
        let generation = state.questions.begin_fetch();
        state.handle_data(DataEvent::Questions(
            generation,
            Ok(vec![question("q-1", &["Alpha", "Beta", "Gamma"])]),
        ));
        assert!(state.start_answer_pick());
        state.answer_pick_move(-1);
        match &state.input_mode {
            InputMode::AnswerPick { id, selected, .. } => {
                assert_eq!(id, "q-1");
                assert_eq!(*selected, 2);
            }
            other => panic!("unexpected mode {other:?}"),
        }
        state.answer_pick_move(1);
        state.answer_pick_move(1);
        match &state.input_mode {
            InputMode::AnswerPick { selected, .. } => assert_eq!(*selected, 1),
            other => panic!("unexpected mode {other:?}"),
        }
    }

    #[test]
    fn answer_picker_keeps_target_across_refetch() {
        let mut state = signed_in_state();
        let generation = state.questions.begin_fetch();
        state.handle_data(DataEvent::Questions(
            generation,
            Ok(vec![question("q-1", &["Alpha", "Beta"]), question("q-2", &["Yes", "No"])]),
        ));
        assert!(state.start_answer_pick());

        // A refresh lands while the picker is open and q-1 has been answered
        // elsewhere; the picker must still submit q-1's own option.
        let refetch = state.questions.begin_fetch();
        state.handle_data(DataEvent::Questions(refetch, Ok(vec![question("q-2", &["Yes", "No"])])));
        assert_eq!(state.selected_question().unwrap().id, "q-2");

        match &state.input_mode {
            InputMode::AnswerPick { id, options, .. } => {
                assert_eq!(id, "q-1");
                assert_eq!(options, &["Alpha", "Beta"]);
            }
            other => panic!("unexpected mode {other:?}"),
        }
    }

    #[test]
    fn reject_feedback_buffer_edits() {
        let mut state = signed_in_state();
        state.start_reject_feedback("ba-1".to_string());
        state.input_push_char('n');
        state.input_push_char('o');
        state.input_backspace();
        match &state.input_mode {
            InputMode::RejectFeedback { id, buffer } => {
                assert_eq!(id, "ba-1");
                assert_eq!(buffer, "n");
            }
            other => panic!("unexpected mode {other:?}"),
        }
        state.cancel_input();
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn selection_wraps_both_directions() {
        let mut state = signed_in_state();
        state.current_screen = Screen::IdeaList;
        let generation = state.ideas.begin_fetch();
        state.handle_data(DataEvent::Ideas(
            generation,
            Ok(vec![idea("a", IdeaStatus::New), idea("b", IdeaStatus::New)]),
        ));
        assert_eq!(state.selected_idea, Some(0));
        state.select_previous();
        assert_eq!(state.selected_idea, Some(1));
        state.select_next();
        assert_eq!(state.selected_idea, Some(0));
    }

    #[test]
    fn selection_clamps_when_refetch_shrinks_list() {
        let mut state = signed_in_state();
        let generation = state.questions.begin_fetch();
        state.handle_data(DataEvent::Questions(
            generation,
            Ok(vec![question("q-1", &["A"]), question("q-2", &["B"])]),
        ));
        state.selected_question = Some(1);
        let refetch = state.questions.begin_fetch();
        state.handle_data(DataEvent::Questions(refetch, Ok(vec![question("q-2", &["B"])])));
        assert_eq!(state.selected_question, Some(0));
    }

    #[test]
    fn lifelog_paging_moves_offset() {
        let mut state = signed_in_state();
        let full_page: Vec<Lifelog> = (0..20)
            .map(|i| Lifelog {
                id: format!("ll-{i}"),
                content: None,
                timestamp: Utc::now(),
                classification: None,
                confidence: None,
            })
            .collect();
        let generation = state.lifelogs.begin_fetch();
        state.handle_data(DataEvent::Lifelogs(generation, Ok(full_page)));

        assert!(state.lifelog_next_page());
        assert_eq!(state.lifelog_offset, 20);
        assert!(state.lifelog_previous_page());
        assert_eq!(state.lifelog_offset, 0);
        assert!(!state.lifelog_previous_page());
    }

    #[test]
    fn short_page_has_no_next() {
        let mut state = signed_in_state();
        let generation = state.lifelogs.begin_fetch();
        state.handle_data(DataEvent::Lifelogs(
            generation,
            Ok(vec![Lifelog {
                id: "ll-1".to_string(),
                content: Some("text".to_string()),
                timestamp: Utc::now(),
                classification: Some("book".to_string()),
                confidence: Some(0.9),
            }]),
        ));
        assert!(!state.lifelog_next_page());
        assert_eq!(state.lifelog_offset, 0);
    }

    #[test]
    fn classified_toggle_resets_paging() {
        let mut state = signed_in_state();
        state.lifelog_offset = 40;
        state.toggle_classified_only();
        assert!(state.classified_only);
        assert_eq!(state.lifelog_offset, 0);
    }
}

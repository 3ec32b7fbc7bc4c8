use chrono::{DateTime, Local};

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub nickname: String,
    pub body: String,
    pub posted_at: DateTime<Local>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentField {
    #[default]
    Nickname,
    Body,
}

/// Sidebar comment box. Lives only as long as the app does.
#[derive(Debug, Default)]
pub struct CommentBoard {
    pub comments: Vec<Comment>,
    pub form_open: bool,
    pub focused_field: CommentField,
    pub draft_nickname: String,
    pub draft_body: String,
}

impl CommentBoard {
    pub fn toggle_form(&mut self) {
        self.form_open = !self.form_open;
        self.focused_field = CommentField::Nickname;
    }

    pub fn switch_field(&mut self) {
        self.focused_field = match self.focused_field {
            CommentField::Nickname => CommentField::Body,
            CommentField::Body => CommentField::Nickname,
        };
    }

    pub fn push_char(&mut self, c: char) {
        self.focused_draft_mut().push(c);
    }

    pub fn pop_char(&mut self) {
        self.focused_draft_mut().pop();
    }

    fn focused_draft_mut(&mut self) -> &mut String {
        match self.focused_field {
            CommentField::Nickname => &mut self.draft_nickname,
            CommentField::Body => &mut self.draft_body,
        }
    }

    /// Appends the drafted comment when both fields are filled in. Returns whether it was posted.
    pub fn post(&mut self) -> bool {
        self.post_at(Local::now())
    }

    pub fn post_at(&mut self, posted_at: DateTime<Local>) -> bool {
        let nickname = self.draft_nickname.trim();
        let body = self.draft_body.trim();
        if nickname.is_empty() || body.is_empty() {
            return false;
        }

        self.comments.push(Comment {
            nickname: nickname.to_string(),
            body: body.to_string(),
            posted_at,
        });
        self.draft_nickname.clear();
        self.draft_body.clear();
        self.focused_field = CommentField::Nickname;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(nickname: &str, body: &str) -> CommentBoard {
        CommentBoard {
            draft_nickname: nickname.to_string(),
            draft_body: body.to_string(),
            ..CommentBoard::default()
        }
    }

    #[test]
    fn complete_comment_is_appended_and_drafts_cleared() {
        let mut board = board_with("neo", "whoa");
        assert!(board.post());
        assert_eq!(board.comments.len(), 1);
        assert_eq!(board.comments[0].nickname, "neo");
        assert_eq!(board.comments[0].body, "whoa");
        assert!(board.draft_nickname.is_empty());
        assert!(board.draft_body.is_empty());
    }

    #[test]
    fn missing_field_is_rejected_and_drafts_kept() {
        let mut board = board_with("neo", "");
        assert!(!board.post());
        assert!(board.comments.is_empty());
        assert_eq!(board.draft_nickname, "neo");

        let mut board = board_with("  ", "text");
        assert!(!board.post());
        assert!(board.comments.is_empty());
        assert_eq!(board.draft_body, "text");
    }

    #[test]
    fn comments_keep_posting_order() {
        let mut board = board_with("a", "first");
        board.post();
        board.draft_nickname = "b".into();
        board.draft_body = "second".into();
        board.post();
        let bodies: Vec<_> = board.comments.iter().map(|c| c.body.as_str()).collect();
        assert_eq!(bodies, ["first", "second"]);
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut board = CommentBoard::default();
        board.toggle_form();
        board.push_char('x');
        board.switch_field();
        board.push_char('y');
        board.push_char('z');
        board.pop_char();
        assert_eq!(board.draft_nickname, "x");
        assert_eq!(board.draft_body, "y");
    }
}

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{MessageList, TitleBar};

/// Draw one frame: title bar, conversation, input box.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(3)]);
    let [title_area, main_area, input_area] = layout.areas(frame.area());

    let mut title_bar = TitleBar::new(app.user_email.clone(), app.status_message.clone());
    title_bar.render(frame, title_area);

    let mut message_list = MessageList {
        conversation: &app.conversation,
        is_waiting: app.is_waiting,
        spinner_frame,
        state: &mut tui.message_list,
    };
    message_list.render(frame, main_area);

    tui.input_box.render(frame, input_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_draw_ui_empty_app() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();
        let mut tui = TuiState::new();
        terminal
            .draw(|f| {
                draw_ui(f, &app, &mut tui, 0);
            })
            .unwrap();
    }

    #[test]
    fn test_draw_ui_with_conversation() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        app.conversation.add_user("What's the leave policy?".to_string());
        app.conversation.add_bot("21 days per year.".to_string());
        let mut tui = TuiState::new();

        terminal
            .draw(|f| {
                draw_ui(f, &app, &mut tui, 0);
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(text.contains("HR Chat"));
        assert!(text.contains("What's the leave policy?"));
        assert!(text.contains("21 days per year."));
        assert!(text.contains("Message"));
    }
}

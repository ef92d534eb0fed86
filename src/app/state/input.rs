use super::*;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

impl AppState {
    pub(crate) async fn handle_input(
        &mut self,
        event: Event,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if self.dialog.is_some() {
            return self.handle_dialog_key(key, tx).await;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                tx.send(AppEvent::Quit).await?;
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') => tx.send(AppEvent::Quit).await?,
            KeyCode::Char('h') => self.open_view(View::Hourly),
            KeyCode::Char('d') => {
                self.open_view(View::FiveDay);
                self.start_five_day_fetch(tx);
            }
            KeyCode::Esc | KeyCode::Char('b') => self.open_view(View::Current),
            KeyCode::Char('p') => self.dialog = Some(PrefsDialog::new(&self.prefs)),
            KeyCode::Char('r') => self.reload_preferences(tx).await?,
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => {
                self.scroll = (self.scroll + 1).min(self.row_count().saturating_sub(1));
            }
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(PAGE_ROWS),
            KeyCode::PageDown => {
                self.scroll = (self.scroll + PAGE_ROWS).min(self.row_count().saturating_sub(1));
            }
            _ => {}
        }
        Ok(())
    }

    fn open_view(&mut self, view: View) {
        if self.view != view {
            self.view = view;
            self.scroll = 0;
        }
    }

    async fn handle_dialog_key(&mut self, key: KeyEvent, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        let Some(dialog) = self.dialog.as_mut() else {
            return Ok(());
        };

        match dialog.handle_key(key) {
            DialogAction::None => {}
            DialogAction::Cancel => self.dialog = None,
            DialogAction::Search(query) => self.start_search(tx, query),
            DialogAction::Save => {
                if let Some(prefs) = self.save_dialog() {
                    self.apply_preferences(prefs);
                    self.refetch_all(tx).await?;
                }
            }
        }
        Ok(())
    }
}

const PAGE_ROWS: usize = 10;

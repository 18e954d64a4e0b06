use std::any::Any;

use super::*;

impl App {
    pub(super) fn mode(&self) -> UiMode {
        self.frames
            .last()
            .map(|f| f.view.mode())
            .unwrap_or(UiMode::Home)
    }

    pub(super) fn view(&self) -> &dyn View {
        match self.frames.last() {
            Some(f) => f.view.as_ref(),
            None => &HomeView,
        }
    }

    pub(super) fn view_mut(&mut self) -> Option<&mut dyn View> {
        self.frames.last_mut().map(|f| f.view.as_mut())
    }

    pub(in crate::tui_shell) fn current_view_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.frames
            .last_mut()
            .and_then(|f| f.view.as_any_mut().downcast_mut::<T>())
    }

    pub(in crate::tui_shell) fn current_view<T: Any>(&self) -> Option<&T> {
        self.frames
            .last()
            .and_then(|f| f.view.as_any().downcast_ref::<T>())
    }

    fn push_view<V: View>(&mut self, view: V) {
        self.frames.push(ViewFrame {
            view: Box::new(view),
        });
    }

    /// Goes to `route`, or to where the guard sends it. Fetching is
    /// deferred to the next loop turn so "Loading..." is drawn first.
    pub(in crate::tui_shell) fn navigate(&mut self, route: Route) {
        let target = guard(route.clone(), self.ctx.is_signed_in());
        if target != route {
            self.push_error(format!("{} requires sign in", route));
        }

        if target == Route::Home {
            self.frames.truncate(1);
            return;
        }
        if self.view().route() == target {
            self.frames.pop();
        }
        match target {
            Route::Home => {}
            Route::Companies => self.push_view(CompaniesView::new("")),
            Route::Company(handle) => self.push_view(CompanyView::new(handle)),
            Route::Jobs => self.push_view(JobsView::default()),
            Route::Login => self.push_view(AuthView {
                kind: AuthKind::Login,
            }),
            Route::Signup => self.push_view(AuthView {
                kind: AuthKind::Signup,
            }),
            Route::Profile => self.push_view(ProfileView::default()),
        }
        self.pending_load = true;
    }

    pub(in crate::tui_shell) fn go_home(&mut self) {
        self.navigate(Route::Home);
    }

    pub(in crate::tui_shell) fn request_reload(&mut self) {
        self.pending_load = true;
    }

    pub(super) fn run_pending_load(&mut self) {
        if !std::mem::take(&mut self.pending_load) {
            return;
        }
        let ctx = &self.ctx;
        if let Some(frame) = self.frames.last_mut() {
            frame.view.load(ctx);
        }
    }

    pub(super) fn pop_mode(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
        if self.view().is_loading() {
            self.pending_load = true;
        }
    }

    pub(super) fn prompt(&self) -> &'static str {
        self.mode().prompt()
    }
}

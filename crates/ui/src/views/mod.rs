mod home;
mod quiz;
mod result;
mod screen;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use quiz::QuizView;
pub use result::ResultView;
pub use screen::Screen;
pub use state::ViewError;

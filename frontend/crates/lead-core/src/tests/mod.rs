mod forms;
mod guard;
mod models;
mod onboarding;
mod targeting;

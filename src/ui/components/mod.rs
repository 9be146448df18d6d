pub mod answer_field;
pub mod completion;
pub mod progress_bar;
pub mod quiz_message;
pub mod verb_card;

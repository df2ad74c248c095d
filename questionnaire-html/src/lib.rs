//! HTML markup for questionnaire.
//!
//! Provides [`HtmlImageTag`], the [`ImageMarkup`](questionnaire::ImageMarkup)
//! collaborator for `image` questions, and fragment generators for question
//! labels and group fieldsets.
//!
//! ```rust
//! use questionnaire::{Presenter, QuestionDefaults, ResponseSet, SurveyCatalog};
//! use questionnaire_html::{HtmlOptions, question_html};
//!
//! let catalog = SurveyCatalog::new();
//! let options = HtmlOptions::new().with_asset_prefix("/assets");
//! let images = options.image_tag();
//! let presenter = Presenter::new(&catalog).with_images(&images);
//!
//! let question = QuestionDefaults::default()
//!     .build("pets/cat.png")
//!     .unwrap()
//!     .with_display_type("image");
//! let html = question_html(&presenter, &question, &ResponseSet::new(), None, None, &options).unwrap();
//! assert!(html.contains("<img src=\"/assets/pets/cat.png\" alt=\"Cat\" />"));
//! ```

mod markup;

pub use markup::{HtmlImageTag, HtmlOptions, escape_html, group_open_html, question_html};

pub mod announcement;
pub mod competition_year;
pub mod contact;
pub mod event;
pub mod gallery_item;
pub mod hostel;
pub mod leg;
pub mod score;
pub mod slug;
pub mod status;

pub use announcement::{Announcement, AnnouncementKind};
pub use competition_year::{CompetitionYear, YearIndex};
pub use contact::ContactPerson;
pub use event::{DEFAULT_EVENT_IMAGE, DEFAULT_MAX_POINTS, Event, MAX_EVENT_POINTS};
pub use gallery_item::GalleryItem;
pub use hostel::Hostel;
pub use leg::{Leg, LegTheme};
pub use score::Score;
pub use slug::slugify;
pub use status::Status;

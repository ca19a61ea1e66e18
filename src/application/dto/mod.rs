pub mod articles;
pub mod auth;
pub mod flash;
pub mod forms;
pub mod pagination;
pub mod users;

pub use articles::{ArticleDto, ArticleSummaryDto, ArticleViewDto, CommentDto, CommentViewDto};
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use flash::{FlashLevel, FlashMessage};
pub use forms::{ArticleForm, CommentForm, FieldError, FieldErrors, PhotoUpload, RegistrationForm};
pub use pagination::PageDto;
pub use users::{CapabilityView, UserDto, UserProfileDto, UserSummaryDto};

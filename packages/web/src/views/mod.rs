mod guards;
pub use guards::{Redirect, RequireLogin, RequireRole, PublicOnly};

mod layout;
pub use layout::AppLayout;

mod login;
pub use login::Login;

mod logout;
pub use logout::Logout;

mod dashboard;
pub use dashboard::Dashboard;

mod gardens;
pub use gardens::Gardens;

mod garden_detail;
pub use garden_detail::{GardenEdit, GardenNew};

mod shared_gardens;
pub use shared_gardens::SharedGardens;

mod users;
pub use users::Users;

mod user_detail;
pub use user_detail::{UserEdit, UserNew};

mod roles;
pub use roles::Roles;

mod profile;
pub use profile::Profile;

mod not_found;
pub use not_found::NotFound;

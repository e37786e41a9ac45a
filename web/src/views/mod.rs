mod generate;
mod login;
mod register;
mod set_detail;
mod sets;

pub use generate::Generate;
pub use login::Login;
pub use register::Register;
pub use set_detail::SetDetail;
pub use sets::Sets;

//! Backend endpoint paths, relative to the configured base URL.

pub const LOGIN: &str = "/passport/auth/login";
pub const REGISTER: &str = "/passport/auth/register";
pub const FORGOT_PASSWORD: &str = "/passport/auth/forget";
pub const SEND_EMAIL_VERIFY: &str = "/passport/comm/sendEmailVerify";
pub const GET_CONFIG: &str = "/guest/comm/config";
pub const GET_USER_INFO: &str = "/user/getUserInfo";
pub const GET_SUBSCRIBE: &str = "/user/subscribe";
// Backend spells it this way.
pub const GET_DASHBOARD: &str = "/user/dashbord";
pub const GET_PLANS: &str = "/user/plan/fetch";
pub const GET_PUBLIC_PLANS: &str = "/guest/plan/fetch";
pub const CREATE_ORDER: &str = "/user/order/save";
pub const CHECKOUT_ORDER: &str = "/user/order/checkout";
pub const GET_ORDERS: &str = "/user/order/fetch";
pub const GET_PAYMENT_METHODS: &str = "/user/order/getPaymentMethod";
pub const GET_SERVERS: &str = "/user/server/fetch";

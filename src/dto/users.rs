use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Address;

#[derive(Debug, Serialize, ToSchema)]
pub struct AddressList {
    pub addresses: Vec<Address>,
}

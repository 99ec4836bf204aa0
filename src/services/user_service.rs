use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};

use crate::{
    dto::users::AddressList,
    entity::users::{ActiveModel as UserActive, Entity as Users, Model as UserModel},
    error::{AppError, AppResult},
    models::{Address, Phone, User},
    response::Ack,
    state::AppState,
};

pub async fn list_addresses(state: &AppState, phone: &str) -> AppResult<AddressList> {
    let phone = parse_phone(phone)?;
    let addresses = match Users::find_by_id(phone.as_str()).one(&state.orm).await? {
        Some(user) => user_from_entity(user)?.addresses,
        None => Vec::new(),
    };
    Ok(AddressList { addresses })
}

pub async fn add_address(state: &AppState, phone: &str, address: Address) -> AppResult<Ack> {
    let phone = parse_phone(phone)?;
    let name = address.full_name.clone();
    save_address(&state.orm, &phone, &name, address, Utc::now()).await?;
    Ok(Ack::ok())
}

/// Create the user owning `phone`, or append `address` to its book when no
/// entry with the same phone and street exists yet.
///
/// This reads then writes without a transaction. Two concurrent appends for
/// the same phone each rewrite the list they read, so one of the new
/// addresses is lost. Two concurrent first saves race on the primary key and
/// the second insert fails.
pub async fn save_address<C>(
    conn: &C,
    phone: &Phone,
    name: &str,
    address: Address,
    now: DateTime<Utc>,
) -> AppResult<()>
where
    C: ConnectionTrait,
{
    let Some(existing) = Users::find_by_id(phone.as_str()).one(conn).await? else {
        UserActive {
            phone: Set(phone.to_string()),
            name: Set(name.to_string()),
            addresses: Set(serde_json::to_value(vec![address])?),
            is_active: Set(true),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(conn)
        .await?;
        tracing::info!(phone = %phone, "user created");
        return Ok(());
    };

    let mut addresses: Vec<Address> = serde_json::from_value(existing.addresses.clone())?;
    if !append_unique(&mut addresses, address) {
        return Ok(());
    }

    let count = addresses.len();
    let mut active: UserActive = existing.into();
    active.addresses = Set(serde_json::to_value(addresses)?);
    active.updated_at = Set(now.into());
    active.update(conn).await?;

    tracing::info!(phone = %phone, count, "address appended");
    Ok(())
}

/// Push `address` unless an entry with the same phone and street is present.
/// Returns whether the list changed.
pub fn append_unique(addresses: &mut Vec<Address>, address: Address) -> bool {
    if addresses.iter().any(|a| a.same_destination(&address)) {
        return false;
    }
    addresses.push(address);
    true
}

/// Parse a phone taken from a path segment or query string.
///
/// An unencoded `+` in a query string decodes to a space, so ` 963…` is read
/// as `+963…`.
pub(crate) fn parse_phone(raw: &str) -> AppResult<Phone> {
    let restored;
    let raw = match raw.strip_prefix(' ') {
        Some(rest) if rest.trim_start().starts_with("963") => {
            restored = format!("+{}", rest.trim_start());
            restored.as_str()
        }
        _ => raw,
    };
    Phone::parse(raw).map_err(|err| AppError::BadRequest(err.to_string()))
}

fn user_from_entity(model: UserModel) -> AppResult<User> {
    Ok(User {
        phone: model.phone,
        name: model.name,
        addresses: serde_json::from_value(model.addresses)?,
        is_active: model.is_active,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    })
}

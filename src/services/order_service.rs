use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::{
    dto::orders::{
        CreateOrderRequest, CreateOrderResponse, DeliveryNotice, OrderList,
        UpdateOrderStatusRequest,
    },
    entity::{
        orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, Model as OrderModel},
        products::Entity as Products,
    },
    error::{AppError, AppResult},
    models::{Address, Order, OrderItem, OrderStatus},
    services::{
        product_service::{parse_id, product_from_entity},
        user_service::{parse_phone, save_address},
    },
    state::AppState,
};

/// Place a cash-on-delivery order and remember its address for the customer.
///
/// Every product is resolved before anything is written. The order insert
/// and the address book update are independent writes.
pub async fn create_order(
    state: &AppState,
    payload: CreateOrderRequest,
) -> AppResult<CreateOrderResponse> {
    let mut items = Vec::with_capacity(payload.items.len());
    for item in &payload.items {
        let product = match parse_id(&item.product_id) {
            Some(id) => Products::find_by_id(id).one(&state.orm).await?,
            None => None,
        };
        let Some(product) = product else {
            return Err(AppError::BadRequest(format!(
                "Invalid product: {}",
                item.product_id
            )));
        };
        let product = product_from_entity(product)?;
        items.push(OrderItem::snapshot(&product, item.quantity));
    }

    let address = Address {
        id: None,
        full_name: payload.full_name,
        phone: payload.phone,
        city: payload.city,
        street: payload.street,
        notes: payload.notes,
    };

    let now = Utc::now();
    let status = OrderStatus::PendingCod;
    let order = OrderActive {
        id: Set(Uuid::new_v4()),
        user_phone: Set(address.phone.to_string()),
        user_name: Set(address.full_name.clone()),
        items: Set(serde_json::to_value(&items)?),
        address: Set(serde_json::to_value(&address)?),
        city: Set(address.city.clone()),
        notes: Set(address.notes.clone()),
        status: Set(status.as_str().to_string()),
        admin_note: Set(None),
        expected_delivery_date: Set(None),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(
        order_id = %order.id,
        phone = %order.user_phone,
        items = items.len(),
        "order placed"
    );

    let phone = address.phone.clone();
    let name = address.full_name.clone();
    save_address(&state.orm, &phone, &name, address, now).await?;

    Ok(CreateOrderResponse {
        id: order.id,
        status,
    })
}

pub async fn list_orders(state: &AppState, phone: &str) -> AppResult<OrderList> {
    let phone = parse_phone(phone)?;
    let items = Orders::find()
        .filter(OrderCol::UserPhone.eq(phone.as_str()))
        .order_by_desc(OrderCol::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(order_from_entity)
        .collect::<AppResult<Vec<_>>>()?;

    Ok(OrderList { items })
}

/// Set a new status plus any provided admin fields. Any status may follow any other.
pub async fn update_order_status(
    state: &AppState,
    id: &str,
    payload: UpdateOrderStatusRequest,
) -> AppResult<Order> {
    let status = payload
        .status
        .parse::<OrderStatus>()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;
    let Some(id) = parse_id(id) else {
        return Err(AppError::BadRequest("Invalid order id".into()));
    };

    let existing = Orders::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(o) => o,
        None => return Err(AppError::NotFound("Order")),
    };

    let mut active: OrderActive = existing.into();
    active.status = Set(status.as_str().to_string());
    active.updated_at = Set(Utc::now().into());
    if let Some(admin_note) = payload.admin_note {
        active.admin_note = Set(Some(admin_note));
    }
    if let Some(date) = payload.expected_delivery_date {
        active.expected_delivery_date = Set(Some(date));
    }
    let order = active.update(&state.orm).await?;

    tracing::info!(order_id = %order.id, status = %status, "order status updated");

    order_from_entity(order)
}

/// Latest order for `phone` that is currently out for delivery, if any.
pub async fn delivery_notice(state: &AppState, phone: &str) -> AppResult<DeliveryNotice> {
    let phone = parse_phone(phone)?;
    let order = Orders::find()
        .filter(
            Condition::all()
                .add(OrderCol::UserPhone.eq(phone.as_str()))
                .add(OrderCol::Status.eq(OrderStatus::OnDelivery.as_str())),
        )
        .order_by_desc(OrderCol::UpdatedAt)
        .one(&state.orm)
        .await?;

    Ok(match order {
        Some(order) => DeliveryNotice {
            on_delivery: true,
            order_id: Some(order.id),
            expected_delivery_date: order.expected_delivery_date,
        },
        None => DeliveryNotice::none(),
    })
}

fn order_from_entity(model: OrderModel) -> AppResult<Order> {
    Ok(Order {
        id: model.id,
        user_phone: model.user_phone,
        user_name: model.user_name,
        items: serde_json::from_value(model.items)?,
        address: serde_json::from_value(model.address)?,
        city: model.city,
        notes: model.notes,
        status: model
            .status
            .parse::<OrderStatus>()
            .map_err(|_| anyhow::anyhow!("unknown stored status {}", model.status))?,
        admin_note: model.admin_note,
        expected_delivery_date: model.expected_delivery_date,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    })
}

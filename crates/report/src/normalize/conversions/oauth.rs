//! OAuth2 (mixed text/native) order conversion.

use admanager_orders_core::{CompanyId, OrderFields, OrderId, OrderStatus, UserId};

use super::{convert_date_time, convert_money, flag, int, log_unmapped};
use crate::admanager::RawShape;
use crate::admanager::types::OAuthOrder;
use crate::normalize::{MalformedRecordError, TimeZoneResolver};

pub fn convert_oauth_order<Z>(
    order: OAuthOrder,
    zones: &Z,
) -> Result<OrderFields, MalformedRecordError>
where
    Z: TimeZoneResolver + ?Sized,
{
    log_unmapped(RawShape::OAuthDict, &order.unmapped);

    Ok(OrderFields {
        id: OrderId::new(int("id", &order.id)?),
        advertiser_id: CompanyId::new(int("advertiserId", &order.advertiser_id)?),
        creator_id: UserId::new(int("creatorId", &order.creator_id)?),
        trafficker_id: UserId::new(int("traffickerId", &order.trafficker_id)?),
        is_archived: flag(&order.is_archived),
        unlimited_end_date_time: flag(&order.unlimited_end_date_time),
        total_clicks_delivered: int("totalClicksDelivered", &order.total_clicks_delivered)?,
        total_impressions_delivered: int(
            "totalImpressionsDelivered",
            &order.total_impressions_delivered,
        )?,
        start_date_time: convert_date_time("startDateTime", &order.start_date_time, zones)?,
        end_date_time: order
            .end_date_time
            .as_ref()
            .map(|dt| convert_date_time("endDateTime", dt, zones))
            .transpose()?,
        last_modified_date_time: convert_date_time(
            "lastModifiedDateTime",
            &order.last_modified_date_time,
            zones,
        )?,
        total_budget: convert_money(&order.total_budget)?,
        name: order.name,
        currency_code: order.currency_code,
        external_order_id: order.external_order_id.into_text(),
        notes: order.notes,
        po_number: order.po_number,
        last_modified_by_app: order.last_modified_by_app,
        status: OrderStatus::from(order.status),
    })
}

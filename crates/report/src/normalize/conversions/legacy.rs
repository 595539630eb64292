//! Client-path (all-text) order conversion.

use admanager_orders_core::{CompanyId, OrderFields, OrderId, OrderStatus, UserId};

use super::{convert_date_time, convert_money, int, log_unmapped, truthy};
use crate::admanager::RawShape;
use crate::admanager::types::LegacyOrder;
use crate::normalize::{MalformedRecordError, TimeZoneResolver};

pub fn convert_legacy_order<Z>(
    order: LegacyOrder,
    zones: &Z,
) -> Result<OrderFields, MalformedRecordError>
where
    Z: TimeZoneResolver + ?Sized,
{
    log_unmapped(RawShape::LegacyDict, &order.unmapped);

    Ok(OrderFields {
        id: OrderId::new(int("id", &order.id)?),
        advertiser_id: CompanyId::new(int("advertiserId", &order.advertiser_id)?),
        creator_id: UserId::new(int("creatorId", &order.creator_id)?),
        trafficker_id: UserId::new(int("traffickerId", &order.trafficker_id)?),
        is_archived: truthy(&order.is_archived),
        unlimited_end_date_time: truthy(&order.unlimited_end_date_time),
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
        external_order_id: order.external_order_id,
        notes: order.notes,
        po_number: order.po_number,
        last_modified_by_app: order.last_modified_by_app,
        status: OrderStatus::from(order.status),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::normalize::IanaTimeZones;

    fn date_time(day: &str) -> Value {
        json!({
            "date": {"year": "2014", "month": "1", "day": day},
            "hour": "8", "minute": "0", "second": "0",
            "timeZoneID": "America/New_York"
        })
    }

    fn record() -> Value {
        json!({
            "id": "12345",
            "name": "1 for All Campaign",
            "advertiserId": "111",
            "creatorId": "222",
            "traffickerId": "333",
            "currencyCode": "USD",
            "externalOrderId": "0",
            "notes": "Renewal",
            "lastModifiedByApp": "Goog_DFPUI",
            "status": "APPROVED",
            "isArchived": "false",
            "unlimitedEndDateTime": "true",
            "totalClicksDelivered": "42",
            "totalImpressionsDelivered": "10000",
            "startDateTime": date_time("1"),
            "endDateTime": date_time("31"),
            "lastModifiedDateTime": date_time("2"),
            "totalBudget": {"currencyCode": "USD", "microAmount": "2500000000"},
            "appliedLabels": []
        })
    }

    fn convert(value: Value) -> Result<OrderFields, MalformedRecordError> {
        convert_legacy_order(serde_json::from_value(value).unwrap(), &IanaTimeZones)
    }

    #[test]
    fn test_convert_complete_record() {
        let fields = convert(record()).unwrap();
        assert_eq!(fields.id, OrderId::new(12345));
        assert_eq!(fields.advertiser_id, CompanyId::new(111));
        assert_eq!(fields.trafficker_id, UserId::new(333));
        assert_eq!(fields.notes.as_deref(), Some("Renewal"));
        assert_eq!(fields.po_number, None);
        assert_eq!(fields.status, OrderStatus::Approved);
        assert!(!fields.is_archived);
        assert!(fields.unlimited_end_date_time);
        assert_eq!(fields.total_clicks_delivered, 42);
        assert_eq!(fields.total_impressions_delivered, 10_000);
        assert_eq!(fields.total_budget.micro_amount, 2_500_000_000);
        assert_eq!(
            fields.end_date_time.unwrap().to_string(),
            "2014-01-31 08:00:00-05:00"
        );
    }

    #[test]
    fn test_missing_end_date_stays_missing() {
        let mut value = record();
        value.as_object_mut().unwrap().remove("endDateTime");
        let fields = convert(value).unwrap();
        assert_eq!(fields.end_date_time, None);
    }

    #[test]
    fn test_non_numeric_counter_is_malformed() {
        let mut value = record();
        value["totalImpressionsDelivered"] = json!("lots");
        assert!(matches!(
            convert(value),
            Err(MalformedRecordError::InvalidValue {
                field: "totalImpressionsDelivered",
                ..
            })
        ));
    }
}

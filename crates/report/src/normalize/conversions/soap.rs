//! SOAP object order conversion.

use admanager_orders_core::{CompanyId, OrderFields, OrderId, OrderStatus, UserId};

use super::{convert_date_time, convert_money, log_unmapped};
use crate::admanager::RawShape;
use crate::admanager::types::{SoapOrder, WireText};
use crate::normalize::{MalformedRecordError, TimeZoneResolver};

pub fn convert_soap_order<Z>(
    order: SoapOrder,
    zones: &Z,
) -> Result<OrderFields, MalformedRecordError>
where
    Z: TimeZoneResolver + ?Sized,
{
    log_unmapped(RawShape::SoapObject, &order.unmapped);

    Ok(OrderFields {
        id: OrderId::new(order.id),
        advertiser_id: CompanyId::new(order.advertiser_id),
        creator_id: UserId::new(order.creator_id),
        trafficker_id: UserId::new(order.trafficker_id),
        is_archived: order.is_archived,
        unlimited_end_date_time: order.unlimited_end_date_time,
        total_clicks_delivered: order.total_clicks_delivered,
        total_impressions_delivered: order.total_impressions_delivered,
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
        name: order.name.into_text(),
        currency_code: order.currency_code.into_text(),
        external_order_id: order.external_order_id.into_text(),
        notes: order.notes.map(WireText::into_text),
        po_number: order.po_number.map(WireText::into_text),
        last_modified_by_app: order.last_modified_by_app.into_text(),
        status: OrderStatus::from(order.status.into_text()),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::normalize::IanaTimeZones;

    fn date_time(day: i64) -> Value {
        json!({
            "date": {"year": 2019, "month": 11, "day": day},
            "hour": 23, "minute": 59, "second": 59,
            "timeZoneId": "Asia/Tokyo"
        })
    }

    fn record() -> Value {
        json!({
            "id": 555,
            "name": {"value": "Café Crème, \"Été\""},
            "advertiserId": 1,
            "creatorId": 2,
            "traffickerId": 3,
            "currencyCode": "JPY",
            "externalOrderId": 0,
            "notes": {"value": "line one\nline two"},
            "lastModifiedByApp": "Goog_DFPUI",
            "status": {"value": "DRAFT"},
            "isArchived": false,
            "unlimitedEndDateTime": false,
            "totalClicksDelivered": 0,
            "totalImpressionsDelivered": 0,
            "startDateTime": date_time(1),
            "endDateTime": date_time(30),
            "lastModifiedDateTime": date_time(2),
            "totalBudget": {"currencyCode": "JPY", "microAmount": 0},
            "customFieldValues": [{"customFieldId": 1}]
        })
    }

    fn convert(value: Value) -> Result<OrderFields, MalformedRecordError> {
        convert_soap_order(serde_json::from_value(value).unwrap(), &IanaTimeZones)
    }

    #[test]
    fn test_wrapped_text_is_unwrapped() {
        let fields = convert(record()).unwrap();
        assert_eq!(fields.name, "Café Crème, \"Été\"");
        assert_eq!(fields.notes.as_deref(), Some("line one\nline two"));
        assert_eq!(fields.status, OrderStatus::Draft);
        assert_eq!(fields.external_order_id, "0");
    }

    #[test]
    fn test_zone_id_spelling_of_soap_bindings() {
        let fields = convert(record()).unwrap();
        assert_eq!(
            fields.end_date_time.unwrap().to_string(),
            "2019-11-30 23:59:59+09:00"
        );
    }

    #[test]
    fn test_text_flag_does_not_fit_the_shape() {
        let mut value = record();
        value["isArchived"] = json!("false");
        assert!(serde_json::from_value::<SoapOrder>(value).is_err());
    }
}

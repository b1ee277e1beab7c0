//! Printable ticket document written into a fresh browser window.

use crate::format::{format_currency, format_short_date, seat_labels};
use crate::models::{Booking, Movie};

#[derive(Debug, Clone, PartialEq)]
pub struct TicketDocument {
    pub booking_id: String,
    pub html: String,
}

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render_ticket(booking: &Booking, movie: Option<&Movie>) -> TicketDocument {
    let id = escape_html(&booking.booking_id);
    let title = escape_html(movie.map(|m| m.title.as_str()).unwrap_or("Movie"));
    let seats = escape_html(&seat_labels(&booking.seat_numbers));
    let customer = escape_html(&booking.customer_name);
    let date = escape_html(&format_short_date(&booking.booking_date));
    let total = escape_html(&format_currency(booking.total_amount));

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Ticket - {id}</title>
    <style>{TICKET_CSS}</style>
</head>
<body>
    <div class="ticket">
        <div class="header">
            <h1>MOVIE TICKETS</h1>
            <p>Your Ticket to Entertainment</p>
        </div>
        <div class="movie-title">{title}</div>
        <div class="details">
            <div class="detail-item"><span>Booking ID:</span><span>{id}</span></div>
            <div class="detail-item"><span>Seats:</span><span>{seats}</span></div>
            <div class="detail-item"><span>Customer:</span><span>{customer}</span></div>
            <div class="detail-item"><span>Date:</span><span>{date}</span></div>
            <div class="detail-item"><span>Total:</span><span>{total}</span></div>
        </div>
        <div class="barcode">
            <div>{id}</div>
            <div class="bars">|||| |||| |||| ||||</div>
        </div>
        <div class="footer">
            <p>Thank you for booking with us!</p>
            <p>Please arrive 15 minutes before showtime</p>
        </div>
    </div>
    <div class="no-print">
        <button onclick="window.print()">Print Ticket</button>
        <button onclick="window.close()">Close</button>
    </div>
</body>
</html>
"#
    );

    TicketDocument {
        booking_id: booking.booking_id.clone(),
        html,
    }
}

const TICKET_CSS: &str = "
        body { font-family: Arial, sans-serif; padding: 20px; }
        .ticket { border: 2px dashed #333; padding: 20px; max-width: 400px; margin: 0 auto; }
        .header { text-align: center; border-bottom: 2px solid #333; padding-bottom: 10px; margin-bottom: 20px; }
        .movie-title { font-size: 24px; font-weight: bold; margin: 10px 0; }
        .details { margin: 20px 0; }
        .detail-item { display: flex; justify-content: space-between; margin: 5px 0; }
        .barcode { text-align: center; margin: 20px 0; font-family: monospace; }
        .barcode .bars { letter-spacing: 5px; font-size: 24px; }
        .footer { text-align: center; margin-top: 20px; font-size: 12px; color: #666; }
        .no-print { text-align: center; margin-top: 20px; }
        @media print { .no-print { display: none; } }
";

mod circle_circle_contact;
mod contact_dispatch;
mod contact_lifecycle;
mod polygon_contact;
mod warm_start;

pub mod coindesk;

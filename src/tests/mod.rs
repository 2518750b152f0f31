mod integration_export_pages;

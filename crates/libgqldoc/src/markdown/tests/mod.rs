mod admonition_tests;
mod markdown_processor_tests;

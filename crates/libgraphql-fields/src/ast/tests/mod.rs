mod ast_node_tests;
mod type_annotation_tests;
mod value_tests;

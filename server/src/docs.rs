//! Static OpenAPI 3.0 document served at `/api-docs`.
//!
//! The document is declared inline rather than derived from runtime
//! state; keep it in sync with the routes in `lib.rs` when endpoints or
//! body shapes change. Not part of the functional core.

use serde_json::{json, Value};

fn todo_ref() -> Value {
    json!({ "$ref": "#/components/schemas/Todo" })
}

fn error_ref() -> Value {
    json!({ "$ref": "#/components/schemas/ErrorResponse" })
}

fn json_content(schema: Value) -> Value {
    json!({ "application/json": { "schema": schema } })
}

fn id_param() -> Value {
    json!({ "in": "path", "name": "id", "required": true, "schema": { "type": "integer" } })
}

fn not_found_response() -> Value {
    json!({ "description": "Not found", "content": json_content(error_ref()) })
}

pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Todo API",
            "version": "1.0.0",
            "description": "HTTP CRUD API for todo records"
        },
        "servers": [{ "url": "http://localhost:3000" }],
        "components": {
            "schemas": {
                "Todo": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "integer", "example": 1 },
                        "title": { "type": "string", "example": "Buy milk" },
                        "description": { "type": "string", "nullable": true, "example": "2L" },
                        "status": { "type": "string", "example": "pending" }
                    },
                    "required": ["id", "title", "status"]
                },
                "TodoInput": {
                    "type": "object",
                    "properties": {
                        "title": { "type": "string", "example": "Buy milk" },
                        "description": { "type": "string", "nullable": true, "example": "2L" },
                        "status": { "type": "string", "example": "pending" }
                    },
                    "required": ["title"]
                },
                "ErrorResponse": {
                    "type": "object",
                    "properties": {
                        "detail": { "type": "string", "example": "Todo not found" }
                    }
                }
            }
        },
        "paths": {
            "/": {
                "get": {
                    "summary": "Welcome endpoint",
                    "responses": {
                        "200": {
                            "description": "Welcome message",
                            "content": json_content(json!({
                                "type": "object",
                                "properties": { "message": { "type": "string" } }
                            }))
                        }
                    }
                }
            },
            "/health": {
                "get": {
                    "summary": "Health check",
                    "responses": {
                        "200": {
                            "description": "Service status",
                            "content": json_content(json!({
                                "type": "object",
                                "properties": { "status": { "type": "string", "example": "UP" } }
                            }))
                        }
                    }
                }
            },
            "/todos": {
                "get": {
                    "summary": "List todos",
                    "parameters": [
                        { "in": "query", "name": "skip", "schema": { "type": "integer", "default": 0 } },
                        { "in": "query", "name": "limit", "schema": { "type": "integer", "default": 10 } }
                    ],
                    "responses": {
                        "200": {
                            "description": "List of todos",
                            "content": json_content(json!({ "type": "array", "items": todo_ref() }))
                        }
                    }
                },
                "post": {
                    "summary": "Create todo",
                    "requestBody": {
                        "required": true,
                        "content": json_content(json!({ "$ref": "#/components/schemas/TodoInput" }))
                    },
                    "responses": {
                        "201": {
                            "description": "Created todo",
                            "content": json_content(todo_ref())
                        },
                        "422": {
                            "description": "Validation error",
                            "content": json_content(error_ref())
                        }
                    }
                }
            },
            "/todos/{id}": {
                "get": {
                    "summary": "Get todo by id",
                    "parameters": [id_param()],
                    "responses": {
                        "200": { "description": "Todo found", "content": json_content(todo_ref()) },
                        "404": not_found_response()
                    }
                },
                "put": {
                    "summary": "Update todo",
                    "parameters": [id_param()],
                    "requestBody": {
                        "required": true,
                        "content": json_content(json!({ "$ref": "#/components/schemas/TodoInput" }))
                    },
                    "responses": {
                        "200": { "description": "Updated todo", "content": json_content(todo_ref()) },
                        "404": not_found_response()
                    }
                },
                "delete": {
                    "summary": "Delete todo",
                    "parameters": [id_param()],
                    "responses": {
                        "200": {
                            "description": "Deletion confirmation",
                            "content": json_content(json!({
                                "type": "object",
                                "properties": { "detail": { "type": "string", "example": "Todo deleted" } }
                            }))
                        },
                        "404": not_found_response()
                    }
                }
            },
            "/todos/search/all": {
                "get": {
                    "summary": "Search todos by title",
                    "parameters": [
                        { "in": "query", "name": "q", "schema": { "type": "string" } }
                    ],
                    "responses": {
                        "200": {
                            "description": "Search results",
                            "content": json_content(json!({ "type": "array", "items": todo_ref() }))
                        }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_covers_every_route() {
        let doc = openapi_document();
        let paths = doc["paths"].as_object().unwrap();
        for path in ["/", "/health", "/todos", "/todos/{id}", "/todos/search/all"] {
            assert!(paths.contains_key(path), "missing path {path}");
        }
        assert!(doc["components"]["schemas"]["Todo"].is_object());
    }

    #[test]
    fn todo_input_requires_only_title() {
        let doc = openapi_document();
        let required = doc["components"]["schemas"]["TodoInput"]["required"]
            .as_array()
            .unwrap();
        assert_eq!(required.len(), 1);
        assert_eq!(required[0], "title");
    }
}
